use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A caller handed in something the calculation cannot start from.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// A collaborator was asked to do something its current contents forbid,
    /// e.g. removing a card that is not there.
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

pub type Result<T> = std::result::Result<T, Error>;
