//!
//! The failure skip policy.
//!

///
/// Decides whether a descriptor which has already failed is run again at larger sizes.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SkipPolicy {
    /// A failure at some size is assumed to repeat at every larger size.
    #[default]
    Monotonic,
    /// Every trial is run regardless of earlier failures.
    Never,
}

impl SkipPolicy {
    ///
    /// Whether a descriptor with the recorded failure must be skipped.
    ///
    pub fn skips(&self, has_failed: bool) -> bool {
        match self {
            Self::Monotonic => has_failed,
            Self::Never => false,
        }
    }
}

impl std::fmt::Display for SkipPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Monotonic => write!(f, "skip after failure"),
            Self::Never => write!(f, "retry after failure"),
        }
    }
}
