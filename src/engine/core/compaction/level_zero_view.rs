use std::fmt::{Display, Formatter};

use super::group_label::GroupLabel;
use super::policy::LevelZeroPolicy;
use super::position::Position;
use super::segment_view::{SegmentLevel, SegmentView};

/// Level-zero (delete-only) segments of one group, bounded by the oldest growing segment.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelZeroSegmentsView {
    label: GroupLabel,
    segments: Vec<SegmentView>,
    earliest_growing_segment_pos: Position,
    policy: LevelZeroPolicy,
}

impl LevelZeroSegmentsView {
    pub fn new(
        label: GroupLabel,
        segments: Vec<SegmentView>,
        earliest_growing_segment_pos: Position,
        policy: LevelZeroPolicy,
    ) -> Self {
        Self {
            label,
            segments,
            earliest_growing_segment_pos,
            policy,
        }
    }

    pub fn group_label(&self) -> &GroupLabel {
        &self.label
    }

    pub fn segments(&self) -> &[SegmentView] {
        &self.segments
    }

    pub fn earliest_growing_segment_pos(&self) -> &Position {
        &self.earliest_growing_segment_pos
    }

    pub fn policy(&self) -> &LevelZeroPolicy {
        &self.policy
    }

    /// Soft evaluation: fires once the eligible delta size or segment count crosses its minimum.
    pub fn trigger(&self) -> (Option<LevelZeroSegmentsView>, String) {
        let eligible = self.eligible_segments();
        if eligible.is_empty() {
            return (None, String::new());
        }

        let (picked, delta_size) =
            self.pick_within_limits(&eligible, self.policy.max_segment_count);
        if delta_size >= self.policy.min_delta_size_bytes {
            let reason = format!(
                "level zero delta size reaches compaction limit, delta_size={}, limit=[{}, {}]",
                delta_size, self.policy.min_delta_size_bytes, self.policy.max_delta_size_bytes
            );
            return (Some(self.with_segments(picked)), reason);
        }

        if eligible.len() >= self.policy.min_segment_count {
            let reason = format!(
                "level zero segment count reaches compaction limit, count={}, picked={}, delta_size={}, limit=[{}, {}]",
                eligible.len(),
                picked.len(),
                delta_size,
                self.policy.min_segment_count,
                self.policy.max_segment_count
            );
            return (Some(self.with_segments(picked)), reason);
        }

        (None, String::new())
    }

    /// Forced evaluation: any eligible segment is enough. Only the delta size bounds the pick.
    pub fn force_trigger(&self) -> (Option<LevelZeroSegmentsView>, String) {
        let eligible = self.eligible_segments();
        if eligible.is_empty() {
            return (None, String::new());
        }

        let (picked, delta_size) = self.pick_within_limits(&eligible, usize::MAX);
        let reason = format!(
            "force trigger level zero segments, count={}, delta_size={}",
            picked.len(),
            delta_size
        );
        (Some(self.with_segments(picked)), reason)
    }

    /// L0 segments of this group whose DML position is before the growing-segment watermark.
    fn eligible_segments(&self) -> Vec<&SegmentView> {
        self.segments
            .iter()
            .filter(|seg| seg.level == SegmentLevel::L0 && seg.label == self.label)
            .filter(|seg| {
                seg.dml_pos
                    .as_ref()
                    .is_some_and(|pos| pos.is_before(&self.earliest_growing_segment_pos))
            })
            .collect()
    }

    /// Takes segments in order while staying within `max_delta_size_bytes` and `max_count`.
    /// Always picks at least one.
    fn pick_within_limits(
        &self,
        eligible: &[&SegmentView],
        max_count: usize,
    ) -> (Vec<SegmentView>, u64) {
        let mut picked = Vec::new();
        let mut total: u64 = 0;
        for seg in eligible {
            if picked.len() >= max_count {
                break;
            }
            let next = total.saturating_add(seg.delta_size_bytes);
            if !picked.is_empty() && next > self.policy.max_delta_size_bytes {
                break;
            }
            total = next;
            picked.push((*seg).clone());
        }
        (picked, total)
    }

    fn with_segments(&self, segments: Vec<SegmentView>) -> Self {
        Self {
            label: self.label.clone(),
            segments,
            earliest_growing_segment_pos: self.earliest_growing_segment_pos.clone(),
            policy: self.policy.clone(),
        }
    }
}

impl Display for LevelZeroSegmentsView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<i64> = self.segments.iter().map(|seg| seg.id).collect();
        write!(
            f,
            "LevelZeroSegmentsView{{{}, earliest_growing_pos={}, segments={:?}}}",
            self.label, self.earliest_growing_segment_pos, ids
        )
    }
}
