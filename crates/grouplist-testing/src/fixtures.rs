//! Record builders and canned data sets.

use grouplist_types::{GroupId, Record, RecordId};
use serde_json::{Value, json};

/// Named record.
pub fn record(id: RecordId, group_id: GroupId, name: &str) -> Record {
    Record::new(id, group_id, name)
}

/// The seven-record preview set: three groups, group 1 listed first.
pub fn preview_records() -> Vec<Record> {
    vec![
        record(101, 1, "Item 10"),
        record(102, 1, "Item 2"),
        record(201, 2, "Item 20"),
        record(202, 2, "Item 1"),
        record(301, 3, "Item 592"),
        record(302, 3, "Item 6"),
        record(303, 3, "Item 619"),
    ]
}

/// Wire-format data set mixing valid, blank and unnamed records, plus an
/// unknown field that readers must ignore.
pub fn mixed_data_json() -> Value {
    json!([
        {"id": 755, "listId": 2, "name": ""},
        {"id": 203, "listId": 2, "name": ""},
        {"id": 684, "listId": 1, "name": "Item 684"},
        {"id": 276, "listId": 1, "name": "Item 276"},
        {"id": 736, "listId": 3, "name": null},
        {"id": 926, "listId": 4, "name": null},
        {"id": 808, "listId": 4, "name": "Item 808", "extra": true},
        {"id": 680, "listId": 3, "name": "Item 680"},
        {"id": 534, "listId": 4, "name": "Item 534"},
        {"id": 906, "listId": 2, "name": "Item 906"},
        {"id": 35, "listId": 1, "name": "Item 35"},
        {"id": 2, "listId": 1, "name": "Banana"}
    ])
}
