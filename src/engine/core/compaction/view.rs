use std::fmt::{Display, Formatter};

use super::group_label::GroupLabel;
use super::level_zero_view::LevelZeroSegmentsView;
use super::plan::CompactionType;
use super::position::Position;
use super::segment_size_view::SegmentSizeView;
use super::segment_view::SegmentView;

/// Snapshot of one compaction group together with the policy that judges it.
#[derive(Clone, Debug, PartialEq)]
pub enum CompactionView {
    LevelZero(LevelZeroSegmentsView),
    SegmentSize(SegmentSizeView),
}

impl CompactionView {
    pub fn group_label(&self) -> &GroupLabel {
        match self {
            CompactionView::LevelZero(view) => view.group_label(),
            CompactionView::SegmentSize(view) => view.group_label(),
        }
    }

    pub fn segments(&self) -> &[SegmentView] {
        match self {
            CompactionView::LevelZero(view) => view.segments(),
            CompactionView::SegmentSize(view) => view.segments(),
        }
    }

    /// Soft evaluation against the view's thresholds. Returns the views to compact, if any.
    pub fn trigger(&self) -> (Option<CompactionView>, String) {
        match self {
            CompactionView::LevelZero(view) => {
                let (out, reason) = view.trigger();
                (out.map(CompactionView::LevelZero), reason)
            }
            CompactionView::SegmentSize(view) => {
                let (out, reason) = view.trigger();
                (out.map(CompactionView::SegmentSize), reason)
            }
        }
    }

    /// Unconditional evaluation used when the system has spare capacity.
    pub fn force_trigger(&self) -> (Option<CompactionView>, String) {
        match self {
            CompactionView::LevelZero(view) => {
                let (out, reason) = view.force_trigger();
                (out.map(CompactionView::LevelZero), reason)
            }
            CompactionView::SegmentSize(view) => {
                let (out, reason) = view.force_trigger();
                (out.map(CompactionView::SegmentSize), reason)
            }
        }
    }

    pub fn compaction_type(&self) -> CompactionType {
        match self {
            CompactionView::LevelZero(_) => CompactionType::Level0DeleteCompaction,
            CompactionView::SegmentSize(_) => CompactionType::MixCompaction,
        }
    }

    /// Growing-segment watermark carried by level-zero views.
    pub fn watermark(&self) -> Option<&Position> {
        match self {
            CompactionView::LevelZero(view) => Some(view.earliest_growing_segment_pos()),
            CompactionView::SegmentSize(_) => None,
        }
    }
}

impl From<LevelZeroSegmentsView> for CompactionView {
    fn from(view: LevelZeroSegmentsView) -> Self {
        CompactionView::LevelZero(view)
    }
}

impl From<SegmentSizeView> for CompactionView {
    fn from(view: SegmentSizeView) -> Self {
        CompactionView::SegmentSize(view)
    }
}

impl Display for CompactionView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CompactionView::LevelZero(view) => Display::fmt(view, f),
            CompactionView::SegmentSize(view) => Display::fmt(view, f),
        }
    }
}
