use crate::shared::config::CONFIG;

/// Thresholds for deciding when level-zero delete data should be merged.
///
/// Each minimum is clamped to its maximum so both trigger paths stay reachable.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelZeroPolicy {
    pub min_segment_count: usize,
    pub max_segment_count: usize,
    pub min_delta_size_bytes: u64,
    pub max_delta_size_bytes: u64,
}

impl LevelZeroPolicy {
    pub fn new(
        min_segment_count: usize,
        max_segment_count: usize,
        min_delta_size_bytes: u64,
        max_delta_size_bytes: u64,
    ) -> Self {
        let max_segment_count = max_segment_count.max(1);
        Self {
            min_segment_count: min_segment_count.clamp(1, max_segment_count),
            max_segment_count,
            min_delta_size_bytes: min_delta_size_bytes.min(max_delta_size_bytes),
            max_delta_size_bytes,
        }
    }
}

impl Default for LevelZeroPolicy {
    fn default() -> Self {
        let cfg = &CONFIG.compaction.level_zero;
        Self::new(
            cfg.min_segment_count,
            cfg.max_segment_count,
            cfg.min_delta_size_bytes,
            cfg.max_delta_size_bytes,
        )
    }
}

/// Thresholds for merging undersized segments.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSizePolicy {
    pub max_segment_size_bytes: u64,
    pub small_proportion: f64,
    /// Small segments needed before a soft trigger fires (never below 2)
    pub min_small_segments: usize,
}

impl SegmentSizePolicy {
    pub fn new(max_segment_size_bytes: u64, small_proportion: f64, min_small_segments: usize) -> Self {
        Self {
            max_segment_size_bytes,
            small_proportion: small_proportion.clamp(0.0, 1.0),
            min_small_segments: min_small_segments.max(2),
        }
    }

    /// Segments strictly below this size are merge candidates.
    pub fn small_segment_limit(&self) -> u64 {
        (self.max_segment_size_bytes as f64 * self.small_proportion) as u64
    }
}

impl Default for SegmentSizePolicy {
    fn default() -> Self {
        let cfg = &CONFIG.compaction.segment_size;
        Self::new(
            cfg.max_segment_size_bytes,
            cfg.small_proportion,
            cfg.min_small_segments,
        )
    }
}
