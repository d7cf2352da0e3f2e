//! `grouplist list` against data files written into a TestWorld.

use anyhow::Result;
use grouplist_testing::fixtures::mixed_data_json;
use grouplist_testing::{TestWorld, assertions};

fn mixed_world() -> TestWorld {
    TestWorld::new().with_data(&mixed_data_json().to_string())
}

#[test]
fn test_groups_sorted_and_blank_names_dropped() -> Result<()> {
    // Given: a data file with blank and null names across four groups
    let world = mixed_world();
    let data = world.data_path().to_string_lossy().to_string();

    // When: every group is expanded
    let result = world.run(&["--data", &data, "list", "--expand-all", "--format", "json"])?;

    // Then: groups ascend and rows follow the numeric sort
    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json()?;
    assertions::assert_group_ids(&json, &[1, 2, 3, 4])?;
    assertions::assert_row_names(&json, 1, &["Item 35", "Item 276", "Item 684", "Banana"])?;
    assertions::assert_row_names(&json, 2, &["Item 906"])?;
    assertions::assert_row_names(&json, 3, &["Item 680"])?;
    assertions::assert_row_names(&json, 4, &["Item 534", "Item 808"])?;
    assertions::assert_counts_consistent(&json)?;
    assert_eq!(json["content"]["total_items"], 8);
    assert_eq!(json["content"]["expanded_groups"], 4);
    assert!(json.get("badge").is_none());

    Ok(())
}

#[test]
fn test_collapsed_groups_keep_counts() -> Result<()> {
    let world = mixed_world();
    let data = world.data_path().to_string_lossy().to_string();

    let result = world.run(&["--data", &data, "list", "--expand", "4", "--format", "json"])?;

    assert!(result.success());
    let json = result.json()?;
    let groups = json["content"]["groups"].as_array().unwrap();
    assert_eq!(groups[0]["item_count"], 4);
    assert_eq!(groups[0]["expanded"], false);
    assert_eq!(groups[0]["rows"].as_array().unwrap().len(), 0);
    assertions::assert_row_names(&json, 4, &["Item 534", "Item 808"])?;

    Ok(())
}

#[test]
fn test_expand_accepts_comma_list() -> Result<()> {
    let world = mixed_world();
    let data = world.data_path().to_string_lossy().to_string();

    let result = world.run(&["--data", &data, "list", "--expand", "2,3", "--format", "json"])?;

    assert!(result.success());
    let json = result.json()?;
    assert_eq!(json["content"]["expanded_groups"], 2);
    assertions::assert_row_names(&json, 2, &["Item 906"])?;
    assertions::assert_row_names(&json, 1, &[])?;

    Ok(())
}

#[test]
fn test_expand_and_expand_all_conflict() -> Result<()> {
    let world = mixed_world();

    let result = world.run(&["list", "--expand", "1", "--expand-all"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("cannot be used with"));

    Ok(())
}

#[test]
fn test_keys_and_accents_in_json() -> Result<()> {
    let world = mixed_world();
    let data = world.data_path().to_string_lossy().to_string();

    let result = world.run(&["--data", &data, "list", "--expand", "1", "--format", "json"])?;

    let json = result.json()?;
    let group = &json["content"]["groups"][0];
    assert_eq!(group["key"], "sticky-header-1");
    assert_eq!(group["accent"], "#B0D9FF");
    assert_eq!(group["rows"][0]["key"], "data-1-35");
    assert_eq!(group["rows"][0]["index"], 1);
    assert_eq!(group["rows"][3]["id"], 2);
    assert_eq!(json["content"]["groups"][3]["accent"], "#FFB0D9");

    Ok(())
}

#[test]
fn test_config_supplies_data_and_expansion() -> Result<()> {
    // Given: a config pointing at a data file next to it
    let world = mixed_world().with_config("data_path = \"data.json\"\nexpanded = [3]\n");

    let result = world.run(&["list", "--format", "json"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json()?;
    assertions::assert_group_ids(&json, &[1, 2, 3, 4])?;
    assertions::assert_row_names(&json, 3, &["Item 680"])?;
    assert_eq!(json["content"]["expanded_groups"], 1);

    Ok(())
}

#[test]
fn test_bundled_data_is_used_by_default() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["list", "--format", "json"])?;

    assert!(result.success());
    let json = result.json()?;
    assertions::assert_group_ids(&json, &[1, 2, 3, 4])?;
    assert!(json["content"]["total_items"].as_u64().unwrap() > 0);

    Ok(())
}

#[test]
fn test_malformed_entries_are_reported_not_fatal() -> Result<()> {
    let world = TestWorld::new().with_data(
        r#"[{"id": 1, "listId": 1, "name": "Item 1"}, "oops", {"listId": 2, "name": "Item 2"}]"#,
    );
    let data = world.data_path().to_string_lossy().to_string();

    let result = world.run(&["--data", &data, "list", "--expand-all"])?;

    assert!(result.success());
    assert!(result.stderr().contains("Skipped 2 malformed record(s)"));
    assert!(result.stdout().contains("Item 1"));
    assert!(!result.stdout().contains("Item 2"));

    Ok(())
}

#[test]
fn test_without_terminal_default_command_prints() -> Result<()> {
    let world = mixed_world();
    let data = world.data_path().to_string_lossy().to_string();

    let result = world.run(&["--data", &data])?;

    assert!(result.success());
    assert!(result.stdout().contains("▼ List ID: 1 (4 Items)"));
    assert!(result.stdout().contains("Groups: 4  Items: 8  Expanded: 0"));

    Ok(())
}
