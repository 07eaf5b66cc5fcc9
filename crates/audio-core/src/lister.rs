//! Output device listing
//!
//! Walks every device index the backend reports, keeps the output capable
//! ones and pairs each with its host API name. Missing device records are
//! skipped and missing host API records print as [`UNKNOWN_HOST_API`];
//! neither is an error.

use std::io::Write;

use crate::device::{OutputDevice, UNKNOWN_HOST_API};
use crate::error::{AudioError, ListError};
use crate::session::AudioSession;
use crate::traits::AudioBackend;

/// Enumerate the output devices of `backend` inside a single session
pub fn list_output_devices<B: AudioBackend>(backend: &mut B) -> Result<Vec<OutputDevice>, AudioError> {
    let mut session = AudioSession::open(backend)?;

    let count = session.device_count()?;
    let default_output = session.default_output_device();
    tracing::debug!(count, ?default_output, "Enumerating audio devices");

    let mut devices = Vec::new();
    for index in 0..count {
        let Some(info) = session.device_info(index) else {
            tracing::debug!(index, "No device record, skipping");
            continue;
        };
        if !info.is_output() {
            continue;
        }

        let host_api_name = session
            .host_api_info(info.host_api)
            .map(|api| api.name)
            .unwrap_or_else(|| UNKNOWN_HOST_API.to_string());

        devices.push(OutputDevice {
            index,
            name: info.name,
            host_api_name,
            is_default: default_output == Some(index),
        });
    }

    Ok(devices)
}

/// List the output devices of `backend` and write one line per device
///
/// Nothing is written unless enumeration succeeds. Returns the number of
/// lines written.
pub fn write_output_devices<B: AudioBackend, W: Write>(
    backend: &mut B,
    out: &mut W,
) -> Result<usize, ListError> {
    let devices = list_output_devices(backend)?;
    for device in &devices {
        writeln!(out, "{}", device)?;
    }
    out.flush()?;
    Ok(devices.len())
}
