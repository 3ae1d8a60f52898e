//! Error types for ArborDB.

use thiserror::Error;

use crate::common::config::MIN_ORDER;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write
/// `Result<T>`, as `std::io::Result` does.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in ArborDB.
///
/// The index is a pure in-memory structure, so the taxonomy is short:
/// the only fatal condition is an unusable configuration, rejected at
/// construction time. A missing key on lookup or removal is a normal
/// negative result (`Option::None`), never an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The requested fanout cannot form a valid tree.
    #[error("invalid index order {0}: order must be at least {}", MIN_ORDER)]
    InvalidOrder(usize),
}
