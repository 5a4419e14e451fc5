use clevertap_domain::{Identity, Record};
use serde_json::{json, Map, Value};

/// `count` event records with sequential identities `user-0`, `user-1`, ...
pub fn events(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let mut data = Map::new();
            data.insert("seq".to_string(), json!(i));
            Record::event(Identity::Identity(format!("user-{i}")), "Product viewed", data)
        })
        .collect()
}

/// `count` fake page records tagged with the page they came from.
pub fn page_records(page: usize, count: usize) -> Vec<Value> {
    (0..count).map(|i| json!({"page": page, "index": i})).collect()
}
