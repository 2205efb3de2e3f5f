use crate::engine::core::{GroupLabel, LevelZeroPolicy, Position};
use crate::test_helpers::factory::Factory;

#[cfg(test)]
#[test]
fn test_level_zero_view_factory_defaults() {
    let view = Factory::level_zero_view().create();

    assert_eq!(view.group_label(), &GroupLabel::new(100, 10, "by-dev-dml_0"));
    assert_eq!(
        view.earliest_growing_segment_pos(),
        &Position::new("by-dev-dml_0", 100)
    );
    assert_eq!(
        view.policy(),
        &LevelZeroPolicy::new(3, 10, 8 * 1024 * 1024, 64 * 1024 * 1024)
    );
    assert!(view.segments().is_empty());
}

#[cfg(test)]
#[test]
fn test_level_zero_view_factory_label_matches_segments() {
    let factory = Factory::level_zero_view().with("channel", "ch-2");
    let segments = Factory::segment_view()
        .with_label(&factory.label())
        .create_list(2);
    let view = factory.with_segments(segments).create();

    assert_eq!(view.segments().len(), 2);
    assert!(view.segments().iter().all(|s| &s.label == view.group_label()));
}
