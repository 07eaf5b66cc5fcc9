//! Named POSIX semaphores
//!
//! Thin wrappers over `sem_unlink(3)` and `sem_open(3)`. Names are passed to
//! the OS untouched, so the leading `/` convention is the caller's business.

mod error;

#[cfg(unix)]
mod named;

pub use error::SemaphoreError;

#[cfg(unix)]
pub use named::{unlink, NamedSemaphore};

/// Named semaphores are a POSIX facility
#[cfg(not(unix))]
pub fn unlink<N: AsRef<std::ffi::OsStr>>(_name: N) -> Result<(), SemaphoreError> {
    Err(SemaphoreError::Unsupported)
}
