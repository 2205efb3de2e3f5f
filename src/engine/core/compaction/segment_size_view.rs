use std::fmt::{Display, Formatter};

use super::group_label::GroupLabel;
use super::policy::SegmentSizePolicy;
use super::segment_view::{SegmentLevel, SegmentView};

/// Sealed segments of one group, evaluated for merging undersized segments together.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentSizeView {
    label: GroupLabel,
    segments: Vec<SegmentView>,
    policy: SegmentSizePolicy,
}

impl SegmentSizeView {
    pub fn new(label: GroupLabel, segments: Vec<SegmentView>, policy: SegmentSizePolicy) -> Self {
        Self {
            label,
            segments,
            policy,
        }
    }

    pub fn group_label(&self) -> &GroupLabel {
        &self.label
    }

    pub fn segments(&self) -> &[SegmentView] {
        &self.segments
    }

    pub fn policy(&self) -> &SegmentSizePolicy {
        &self.policy
    }

    pub fn trigger(&self) -> (Option<SegmentSizeView>, String) {
        let small = self.small_segments();
        if small.len() < self.policy.min_small_segments {
            return (None, String::new());
        }
        self.merge_small(&small, "small segment count reaches compaction limit")
    }

    pub fn force_trigger(&self) -> (Option<SegmentSizeView>, String) {
        let small = self.small_segments();
        self.merge_small(&small, "force trigger small segments")
    }

    fn merge_small(&self, small: &[&SegmentView], cause: &str) -> (Option<SegmentSizeView>, String) {
        let (packed, total) = self.pack(small);
        // A single segment has nothing to merge with.
        if packed.len() < 2 {
            return (None, String::new());
        }
        let reason = format!(
            "{}, small_count={}, picked={}, merged_size={}, max_size={}",
            cause,
            small.len(),
            packed.len(),
            total,
            self.policy.max_segment_size_bytes
        );
        (Some(self.with_segments(packed)), reason)
    }

    fn small_segments(&self) -> Vec<&SegmentView> {
        let limit = self.policy.small_segment_limit();
        self.segments
            .iter()
            .filter(|seg| seg.level != SegmentLevel::L0 && seg.label == self.label)
            .filter(|seg| seg.size_bytes < limit)
            .collect()
    }

    fn pack(&self, small: &[&SegmentView]) -> (Vec<SegmentView>, u64) {
        let mut packed = Vec::new();
        let mut total: u64 = 0;
        for seg in small {
            let next = total.saturating_add(seg.size_bytes);
            if !packed.is_empty() && next > self.policy.max_segment_size_bytes {
                break;
            }
            total = next;
            packed.push((*seg).clone());
        }
        (packed, total)
    }

    fn with_segments(&self, segments: Vec<SegmentView>) -> Self {
        Self {
            label: self.label.clone(),
            segments,
            policy: self.policy.clone(),
        }
    }
}

impl Display for SegmentSizeView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<i64> = self.segments.iter().map(|seg| seg.id).collect();
        write!(f, "SegmentSizeView{{{}, segments={:?}}}", self.label, ids)
    }
}
