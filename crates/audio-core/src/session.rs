//! Scoped ownership of an initialized audio subsystem

use std::ops::{Deref, DerefMut};

use crate::error::AudioError;
use crate::traits::AudioBackend;

/// An initialized backend, terminated when dropped
///
/// Termination runs exactly once for every session that opened
/// successfully, whichever way the caller leaves the scope.
pub struct AudioSession<'a, B: AudioBackend> {
    backend: &'a mut B,
}

impl<'a, B: AudioBackend> AudioSession<'a, B> {
    /// Initialize `backend`. Nothing needs tearing down if this fails.
    pub fn open(backend: &'a mut B) -> Result<Self, AudioError> {
        backend.initialize()?;
        tracing::debug!("Audio subsystem initialized");
        Ok(Self { backend })
    }
}

impl<B: AudioBackend> Deref for AudioSession<'_, B> {
    type Target = B;

    fn deref(&self) -> &B {
        self.backend
    }
}

impl<B: AudioBackend> DerefMut for AudioSession<'_, B> {
    fn deref_mut(&mut self) -> &mut B {
        self.backend
    }
}

impl<B: AudioBackend> Drop for AudioSession<'_, B> {
    fn drop(&mut self) {
        self.backend.terminate();
        tracing::debug!("Audio subsystem terminated");
    }
}
