//! Error type for the gameplay core.

use core::fmt;

/// Errors raised by the core containers.
///
/// The session orders its transitions so none of these can occur after
/// [`GameSession::start`](crate::GameSession::start). Seeing one means the
/// state machine has a sequencing bug.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// A peek or dequeue was attempted on a container with no elements.
    EmptyContainer { container: &'static str },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyContainer { container } => {
                write!(f, "operation on empty container: {container}")
            }
        }
    }
}

impl std::error::Error for CoreError {}
