use thiserror::Error;

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("{0}")]
    Initialization(String),

    #[error("{0}")]
    Enumeration(String),
}

/// Failure of a listing run that writes its rows somewhere
#[derive(Error, Debug)]
pub enum ListError {
    #[error(transparent)]
    Audio(#[from] AudioError),

    #[error("Failed to write device list: {0}")]
    Io(#[from] std::io::Error),
}
