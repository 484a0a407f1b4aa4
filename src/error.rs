use thiserror::Error;

/// Why a container rejected an operation.
///
/// A rejected operation never changes the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Insertion into a full container.
    #[error("overflow: container is full (capacity {capacity})")]
    Overflow { capacity: usize },

    /// Removal or inspection of an empty container.
    #[error("underflow: container is empty")]
    Underflow,
}
