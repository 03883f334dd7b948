use std::fmt::{self, Display, Formatter};

/// Result type of fallible deque and cursor operations.
pub type Result<T, E = DequeError> = std::result::Result<T, E>;

/// Errors returned by [`Deque`] and its cursors.
///
/// Every operation that fails leaves the deque exactly as it was.
///
/// [`Deque`]: crate::Deque
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DequeError {
    /// A peek was attempted on a deque with no elements.
    EmptyDeque,
    /// A cursor at the end sentinel was moved or dereferenced.
    NullIterator,
    /// The global allocator could not provide memory for a new node.
    AllocationFailure,
}

impl Display for DequeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::EmptyDeque => "empty deque",
            Self::NullIterator => "cursor is at the end of the deque",
            Self::AllocationFailure => "failed to allocate a deque node",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for DequeError {}

#[cfg(test)]
mod tests {
    use crate::error::DequeError;

    #[test]
    fn error_messages() {
        assert_eq!(DequeError::EmptyDeque.to_string(), "empty deque");
        assert_eq!(
            DequeError::NullIterator.to_string(),
            "cursor is at the end of the deque"
        );
        assert_eq!(
            DequeError::AllocationFailure.to_string(),
            "failed to allocate a deque node"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn boxed(err: DequeError) -> Box<dyn std::error::Error + Send + Sync> {
            Box::new(err)
        }
        assert_eq!(boxed(DequeError::EmptyDeque).to_string(), "empty deque");
    }
}
