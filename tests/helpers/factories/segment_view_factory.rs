use crate::engine::core::{GroupLabel, Position, SegmentLevel, SegmentView};
use serde_json::{Value, json};
use std::collections::HashMap;

pub struct SegmentViewFactory {
    params: HashMap<String, Value>,
}

impl SegmentViewFactory {
    pub fn new() -> Self {
        let mut params = HashMap::new();
        params.insert("id".into(), json!(1));
        params.insert("collection_id".into(), json!(100));
        params.insert("partition_id".into(), json!(10));
        params.insert("channel".into(), json!("by-dev-dml_0"));
        params.insert("level".into(), json!("L0"));
        params.insert("start_ts".into(), json!(10));
        params.insert("dml_ts".into(), json!(50)); // null means no DML position
        params.insert("size_bytes".into(), json!(1024 * 1024));
        params.insert("num_rows".into(), json!(1000));
        params.insert("delta_size_bytes".into(), json!(1024 * 1024));
        params.insert("deltalog_count".into(), json!(1));
        Self { params }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn with_label(self, label: &GroupLabel) -> Self {
        self.with("collection_id", label.collection_id)
            .with("partition_id", label.partition_id)
            .with("channel", label.channel.clone())
    }

    pub fn create(self) -> SegmentView {
        let channel = self.params["channel"].as_str().unwrap().to_string();
        let position = |key: &str| {
            self.params[key]
                .as_u64()
                .map(|ts| Position::new(channel.clone(), ts))
        };

        SegmentView {
            id: self.params["id"].as_i64().unwrap(),
            label: GroupLabel::new(
                self.params["collection_id"].as_i64().unwrap(),
                self.params["partition_id"].as_i64().unwrap(),
                channel.clone(),
            ),
            level: serde_json::from_value::<SegmentLevel>(self.params["level"].clone()).unwrap(),
            start_pos: position("start_ts"),
            dml_pos: position("dml_ts"),
            size_bytes: self.params["size_bytes"].as_u64().unwrap(),
            num_rows: self.params["num_rows"].as_u64().unwrap(),
            delta_size_bytes: self.params["delta_size_bytes"].as_u64().unwrap(),
            deltalog_count: self.params["deltalog_count"].as_u64().unwrap() as usize,
        }
    }

    /// `count` segments with consecutive ids starting at the configured id.
    pub fn create_list(self, count: usize) -> Vec<SegmentView> {
        let first = self.params["id"].as_i64().unwrap();
        (0..count)
            .map(|i| {
                SegmentViewFactory {
                    params: self.params.clone(),
                }
                .with("id", first + i as i64)
                .create()
            })
            .collect()
    }
}
