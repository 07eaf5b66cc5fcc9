use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SemaphoreError {
    #[error("Invalid semaphore name {0:?}: contains a NUL byte")]
    InvalidName(String),

    #[error("sem_unlink: {name}: {}", os_text(.source))]
    Unlink { name: String, source: io::Error },

    #[error("sem_open: {name}: {}", os_text(.source))]
    Open { name: String, source: io::Error },

    #[error("Named semaphores are not supported on this platform")]
    Unsupported,
}

impl SemaphoreError {
    /// The OS error behind this failure, if there is one
    pub fn os_error(&self) -> Option<&io::Error> {
        match self {
            SemaphoreError::Unlink { source, .. } | SemaphoreError::Open { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// The OS description alone, as `perror` prints it, without ` (os error N)`
fn os_text(error: &io::Error) -> String {
    let text = error.to_string();
    match error.raw_os_error() {
        Some(code) => match text.strip_suffix(&format!(" (os error {})", code)) {
            Some(description) => description.to_string(),
            None => text,
        },
        None => text,
    }
}
