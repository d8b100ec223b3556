use super::NodeHandle;

/// Error returned by handle-based [`DList`](super::DList) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The handle was already removed, or never belonged to this sequence.
    InvalidHandle(NodeHandle),
}
