use crate::engine::core::{GroupLabel, SegmentSizePolicy};
use crate::test_helpers::factory::Factory;

#[cfg(test)]
#[test]
fn test_segment_size_view_factory_defaults() {
    let view = Factory::segment_size_view().create();

    assert_eq!(view.group_label(), &GroupLabel::new(100, 10, "by-dev-dml_0"));
    assert_eq!(view.policy(), &SegmentSizePolicy::new(100 * 1024 * 1024, 0.5, 3));
    assert!(view.segments().is_empty());
}

#[cfg(test)]
#[test]
fn test_segment_size_view_factory_with_label_and_segments() {
    let factory = Factory::segment_size_view()
        .with("collection_id", 5)
        .with("small_proportion", 0.25);
    let segments = Factory::segment_view()
        .with_label(&factory.label())
        .with("level", "L1")
        .create_list(4);
    let view = factory.with_segments(segments).create();

    assert_eq!(view.group_label().collection_id, 5);
    assert_eq!(view.policy().small_segment_limit(), 25 * 1024 * 1024);
    assert_eq!(view.segments().len(), 4);
}
