use std::ffi::{CString, OsStr};
use std::io;
use std::os::unix::ffi::OsStrExt;

use crate::error::SemaphoreError;

fn c_name(name: &OsStr) -> Result<CString, SemaphoreError> {
    CString::new(name.as_bytes())
        .map_err(|_| SemaphoreError::InvalidName(name.to_string_lossy().into_owned()))
}

/// Remove `name` from the named semaphore namespace
///
/// Processes that still have the semaphore open keep using it; the name
/// is gone immediately. Unlinking a name twice fails the second time.
pub fn unlink<N: AsRef<OsStr>>(name: N) -> Result<(), SemaphoreError> {
    let name = name.as_ref();
    let c_name = c_name(name)?;

    if !name.as_bytes().starts_with(b"/") {
        tracing::debug!("Semaphore name {:?} has no leading '/'", name);
    }

    // SAFETY: `c_name` is a valid NUL terminated string for the duration of the call.
    if unsafe { libc::sem_unlink(c_name.as_ptr()) } != 0 {
        return Err(SemaphoreError::Unlink {
            name: name.to_string_lossy().into_owned(),
            source: io::Error::last_os_error(),
        });
    }

    tracing::debug!("Unlinked semaphore {:?}", name);
    Ok(())
}

/// An open handle to a named semaphore, closed on drop
///
/// Closing does not unlink; the name stays visible until [`unlink`] runs.
#[derive(Debug)]
pub struct NamedSemaphore {
    name: String,
    sem: *mut libc::sem_t,
}

impl NamedSemaphore {
    /// Create a new semaphore, failing if `name` already exists
    pub fn create<N: AsRef<OsStr>>(name: N, initial_value: u32) -> Result<Self, SemaphoreError> {
        let name = name.as_ref();
        let c_name = c_name(name)?;

        // SAFETY: valid C string; the variadic mode and value are passed as
        // c_uint as sem_open expects when O_CREAT is set.
        let sem = unsafe {
            libc::sem_open(
                c_name.as_ptr(),
                libc::O_CREAT | libc::O_EXCL,
                0o600 as libc::c_uint,
                initial_value as libc::c_uint,
            )
        };
        Self::from_raw(name, sem)
    }

    /// Open an existing semaphore
    pub fn open<N: AsRef<OsStr>>(name: N) -> Result<Self, SemaphoreError> {
        let name = name.as_ref();
        let c_name = c_name(name)?;

        // SAFETY: valid C string, no O_CREAT so no variadic arguments.
        let sem = unsafe { libc::sem_open(c_name.as_ptr(), 0) };
        Self::from_raw(name, sem)
    }

    fn from_raw(name: &OsStr, sem: *mut libc::sem_t) -> Result<Self, SemaphoreError> {
        let name = name.to_string_lossy().into_owned();
        if sem == libc::SEM_FAILED {
            return Err(SemaphoreError::Open {
                name,
                source: io::Error::last_os_error(),
            });
        }
        Ok(Self { name, sem })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for NamedSemaphore {
    fn drop(&mut self) {
        // SAFETY: `sem` came from a successful sem_open and is closed only here.
        if unsafe { libc::sem_close(self.sem) } != 0 {
            tracing::warn!(
                "sem_close failed for {}: {}",
                self.name,
                io::Error::last_os_error()
            );
        }
    }
}
