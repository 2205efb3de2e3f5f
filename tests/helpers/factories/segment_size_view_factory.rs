use crate::engine::core::{GroupLabel, SegmentSizePolicy, SegmentSizeView, SegmentView};
use serde_json::{Value, json};
use std::collections::HashMap;

pub struct SegmentSizeViewFactory {
    params: HashMap<String, Value>,
    segments: Vec<SegmentView>,
}

impl SegmentSizeViewFactory {
    pub fn new() -> Self {
        let mut params = HashMap::new();
        params.insert("collection_id".into(), json!(100));
        params.insert("partition_id".into(), json!(10));
        params.insert("channel".into(), json!("by-dev-dml_0"));
        params.insert("max_segment_size_bytes".into(), json!(100 * 1024 * 1024));
        params.insert("small_proportion".into(), json!(0.5));
        params.insert("min_small_segments".into(), json!(3));
        Self {
            params,
            segments: Vec::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn with_segments(mut self, segments: Vec<SegmentView>) -> Self {
        self.segments = segments;
        self
    }

    pub fn label(&self) -> GroupLabel {
        GroupLabel::new(
            self.params["collection_id"].as_i64().unwrap(),
            self.params["partition_id"].as_i64().unwrap(),
            self.params["channel"].as_str().unwrap(),
        )
    }

    pub fn create(self) -> SegmentSizeView {
        let policy = SegmentSizePolicy::new(
            self.params["max_segment_size_bytes"].as_u64().unwrap(),
            self.params["small_proportion"].as_f64().unwrap(),
            self.params["min_small_segments"].as_u64().unwrap() as usize,
        );
        SegmentSizeView::new(self.label(), self.segments, policy)
    }
}
