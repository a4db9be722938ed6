use std::error;
use std::fmt;
use std::result;

/// Errors returned by heap operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The heap holds no elements, so there is no maximum to return.
    EmptyCollection,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyCollection => write!(f, "collection is empty"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_display() {
        assert_eq!(Error::EmptyCollection.to_string(), "collection is empty");
    }
}
