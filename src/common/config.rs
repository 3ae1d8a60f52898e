//! Configuration constants for ArborDB.

/// Smallest usable fanout for an [`OrderedIndex`](crate::OrderedIndex).
///
/// With fewer than 3 keys per node a split cannot leave both halves
/// non-empty around a separator, so no smaller order forms a valid tree.
/// Construction rejects anything below this with
/// [`Error::InvalidOrder`](crate::Error::InvalidOrder).
pub const MIN_ORDER: usize = 3;

/// Default fanout used by `OrderedIndex::default()`.
///
/// Eight keys per node keeps the tree shallow for small workloads while
/// still exercising splits and merges at test sizes.
pub const DEFAULT_ORDER: usize = 8;
