//!
//! The set of descriptors which have failed during the run.
//!

use std::collections::HashMap;
use std::sync::Arc;

use crate::descriptor::Descriptor;

///
/// The descriptors known to have failed, with the size of their first failure.
///
/// The set only grows during a run.
///
#[derive(Debug, Default, Clone)]
pub struct FailureSet {
    /// The first failure size per descriptor.
    inner: HashMap<Arc<Descriptor>, usize>,
}

impl FailureSet {
    ///
    /// Records a failure, keeping the earliest size.
    ///
    pub fn insert(&mut self, descriptor: Arc<Descriptor>, function_count: usize) {
        self.inner.entry(descriptor).or_insert(function_count);
    }

    ///
    /// Whether the descriptor has failed.
    ///
    pub fn contains(&self, descriptor: &Descriptor) -> bool {
        self.inner.contains_key(descriptor)
    }

    ///
    /// The size of the first failure of the descriptor.
    ///
    pub fn first_failure(&self, descriptor: &Descriptor) -> Option<usize> {
        self.inner.get(descriptor).copied()
    }

    ///
    /// The number of failed descriptors.
    ///
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    ///
    /// Whether nothing has failed.
    ///
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
