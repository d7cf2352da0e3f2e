use anyhow::Result;
use grouplist_testing::{TestWorld, assertions};

#[test]
fn test_demo_print_plain() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["demo", "--print"])?;

    assert!(result.success());
    insta::assert_snapshot!(result.stdout(), @r"
    ▲ List ID: 1 (2 Items)
          1  Item 2   ID: 102
          2  Item 10  ID: 101
    ▼ List ID: 2 (2 Items)
    ▼ List ID: 3 (3 Items)

    Groups: 3  Items: 7  Expanded: 1
    ");

    Ok(())
}

#[test]
fn test_demo_print_json() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["demo", "--print", "--format", "json"])?;

    assert!(result.success());
    let json = result.json()?;
    assertions::assert_group_ids(&json, &[1, 2, 3])?;
    assertions::assert_row_names(&json, 1, &["Item 2", "Item 10"])?;
    assertions::assert_row_names(&json, 2, &[])?;
    assert_eq!(json["content"]["groups"][2]["item_count"], 3);
    assert_eq!(json["content"]["groups"][1]["accent"], "#C8FFB0");

    Ok(())
}

#[test]
fn test_demo_without_terminal_honors_format() -> Result<()> {
    let world = TestWorld::new();

    // stdout is a pipe here, so the interactive list falls back to printing
    let result = world.run(&["demo", "--format", "json"])?;

    assert!(result.success());
    let json = result.json()?;
    assertions::assert_group_ids(&json, &[1, 2, 3])?;
    assert_eq!(json["content"]["total_items"], 7);

    Ok(())
}

#[test]
fn test_demo_ignores_data_flag() -> Result<()> {
    let world = TestWorld::new().with_data("[]");
    let data = world.data_path().to_string_lossy().to_string();

    let result = world.run(&["--data", &data, "demo", "--print", "--format", "json"])?;

    let json = result.json()?;
    assert_eq!(json["content"]["total_items"], 7);

    Ok(())
}
