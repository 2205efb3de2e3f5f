use std::sync::atomic::{AtomicI64, Ordering};

use super::group_label::UniqueId;
use crate::engine::errors::AllocError;

/// Source of globally unique identifiers. Implementations must be safe to call concurrently.
pub trait IdAllocator: Send + Sync {
    fn alloc_id(&self) -> Result<UniqueId, AllocError>;
}

/// In-process allocator handing out increasing ids from an atomic counter.
#[derive(Debug)]
pub struct SequentialIdAllocator {
    next: AtomicI64,
    /// Exclusive upper bound; `None` means unbounded
    limit: Option<i64>,
}

impl SequentialIdAllocator {
    pub fn new(start: UniqueId) -> Self {
        Self {
            next: AtomicI64::new(start),
            limit: None,
        }
    }

    /// Allocator that fails with [`AllocError::Exhausted`] once `limit` is reached.
    pub fn with_limit(start: UniqueId, limit: i64) -> Self {
        Self {
            next: AtomicI64::new(start),
            limit: Some(limit),
        }
    }
}

impl Default for SequentialIdAllocator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl IdAllocator for SequentialIdAllocator {
    fn alloc_id(&self) -> Result<UniqueId, AllocError> {
        let result = self
            .next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| match self.limit {
                Some(limit) if current >= limit => None,
                _ => current.checked_add(1),
            });
        match result {
            Ok(id) => Ok(id),
            Err(current) => Err(AllocError::Exhausted {
                limit: self.limit.unwrap_or(current),
            }),
        }
    }
}
