use crate::engine::core::{GroupLabel, Position, SegmentLevel};
use crate::test_helpers::factory::Factory;
use serde_json::Value;

#[cfg(test)]
#[test]
fn test_segment_view_factory_defaults() {
    let seg = Factory::segment_view().create();

    assert_eq!(seg.id, 1);
    assert_eq!(seg.label, GroupLabel::new(100, 10, "by-dev-dml_0"));
    assert_eq!(seg.level, SegmentLevel::L0);
    assert_eq!(seg.start_pos, Some(Position::new("by-dev-dml_0", 10)));
    assert_eq!(seg.dml_pos, Some(Position::new("by-dev-dml_0", 50)));
    assert_eq!(seg.size_bytes, 1024 * 1024);
    assert_eq!(seg.delta_size_bytes, 1024 * 1024);
    assert_eq!(seg.deltalog_count, 1);
}

#[cfg(test)]
#[test]
fn test_segment_view_factory_null_dml_position() {
    let seg = Factory::segment_view().with("dml_ts", Value::Null).create();

    assert!(seg.dml_pos.is_none());
    assert!(seg.start_pos.is_some());
}

#[cfg(test)]
#[test]
fn test_segment_view_factory_with_label() {
    let label = GroupLabel::new(7, 8, "ch-9");
    let seg = Factory::segment_view().with_label(&label).create();

    assert_eq!(seg.label, label);
    assert_eq!(seg.dml_pos.unwrap().channel, "ch-9");
}

#[cfg(test)]
#[test]
fn test_segment_view_factory_create_list() {
    let segs = Factory::segment_view()
        .with("id", 40)
        .with("level", "L1")
        .create_list(3);

    let ids: Vec<i64> = segs.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![40, 41, 42]);
    assert!(segs.iter().all(|s| s.level == SegmentLevel::L1));
}
