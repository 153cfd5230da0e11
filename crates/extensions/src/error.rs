use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtensionError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtensionError {
    #[error("Unknown direction: {0:?} (expected \"publication\" or \"reception\")")]
    UnknownDirection(String),
}
