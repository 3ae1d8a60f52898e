//! Index structures.
//!
//! The B+ tree ordered index lives here. Other index kinds (hash,
//! LSM) would sit alongside it as sibling modules.

pub mod btree;

pub use btree::{IndexStats, Iter, OrderedIndex, StatsSnapshot};
