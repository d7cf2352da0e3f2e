//! Assertions over the JSON emitted by `grouplist list --format json`.

use anyhow::{Context, Result};
use serde_json::Value;

fn groups(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["groups"]
        .as_array()
        .context("Expected 'content.groups' array in JSON")
}

/// Assert the group ids, in output order.
pub fn assert_group_ids(json: &Value, expected: &[i64]) -> Result<()> {
    let actual: Vec<i64> = groups(json)?
        .iter()
        .filter_map(|g| g["group_id"].as_i64())
        .collect();

    if actual != expected {
        anyhow::bail!("Expected groups {:?}, got {:?}", expected, actual);
    }

    Ok(())
}

/// Assert the names of the rows rendered under `group_id`, in order.
pub fn assert_row_names(json: &Value, group_id: i64, expected: &[&str]) -> Result<()> {
    let group = groups(json)?
        .iter()
        .find(|g| g["group_id"].as_i64() == Some(group_id))
        .with_context(|| format!("Group {} not found", group_id))?;

    let actual: Vec<&str> = group["rows"]
        .as_array()
        .context("Expected 'rows' array in group")?
        .iter()
        .filter_map(|row| row["name"].as_str())
        .collect();

    if actual != expected {
        anyhow::bail!(
            "Expected rows {:?} in group {}, got {:?}",
            expected,
            group_id,
            actual
        );
    }

    Ok(())
}

/// Assert that every header's count matches the number of rows it lists,
/// for expanded groups.
pub fn assert_counts_consistent(json: &Value) -> Result<()> {
    for group in groups(json)? {
        if group["expanded"].as_bool() != Some(true) {
            continue;
        }
        let count = group["item_count"].as_u64().context("missing item_count")?;
        let rows = group["rows"].as_array().map_or(0, Vec::len) as u64;
        if count != rows {
            anyhow::bail!(
                "Group {} reports {} items but lists {}",
                group["group_id"],
                count,
                rows
            );
        }
    }
    Ok(())
}
