//! List audio output devices with indices
//!
//! Prints one line per output capable device: index, name, host API, and a
//! trailing `*` on the system default. Arguments are ignored.

use std::io::{self, Write};
use std::process::ExitCode;

use systools_audio_core::{write_output_devices, AudioBackend, AudioError, ListError};
use systools_audio_cpal::CpalBackend;

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;

/// List devices to `out`, report failures to `err`, return the exit status
fn run<B: AudioBackend>(backend: &mut B, out: &mut impl Write, err: &mut impl Write) -> u8 {
    let message = match write_output_devices(backend, out) {
        Ok(count) => {
            tracing::debug!("Listed {} output devices", count);
            return EXIT_SUCCESS;
        }
        Err(ListError::Audio(AudioError::Initialization(text))) => {
            format!("Audio init failed: {}", text)
        }
        Err(ListError::Audio(e)) => format!("Audio error: {}", e),
        Err(ListError::Io(e)) => format!("Audio error: {}", e),
    };

    // Nowhere left to report a failing stderr
    let _ = writeln!(err, "{}", message);
    EXIT_FAILURE
}

fn main() -> ExitCode {
    systools_logging::init();

    let mut backend = CpalBackend::new();
    let status = run(&mut backend, &mut io::stdout().lock(), &mut io::stderr().lock());
    ExitCode::from(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    use systools_audio_core::{DeviceIndex, DeviceInfo, HostApiIndex, HostApiInfo};

    #[derive(Default)]
    struct StubBackend {
        init_error: Option<&'static str>,
        count_error: Option<&'static str>,
        devices: Vec<DeviceInfo>,
        terminated: bool,
    }

    impl AudioBackend for StubBackend {
        fn initialize(&mut self) -> Result<(), AudioError> {
            match self.init_error {
                Some(text) => Err(AudioError::Initialization(text.to_string())),
                None => Ok(()),
            }
        }

        fn terminate(&mut self) {
            self.terminated = true;
        }

        fn device_count(&mut self) -> Result<usize, AudioError> {
            match self.count_error {
                Some(text) => Err(AudioError::Enumeration(text.to_string())),
                None => Ok(self.devices.len()),
            }
        }

        fn default_output_device(&self) -> Option<DeviceIndex> {
            Some(0)
        }

        fn device_info(&self, index: DeviceIndex) -> Option<DeviceInfo> {
            self.devices.get(index).cloned()
        }

        fn host_api_info(&self, _host_api: HostApiIndex) -> Option<HostApiInfo> {
            Some(HostApiInfo::new("ALSA"))
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn run_captured(backend: &mut StubBackend) -> (u8, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let status = run(backend, &mut out, &mut err);
        (
            status,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_success_exits_zero() {
        let mut backend = StubBackend {
            devices: vec![DeviceInfo::new("default".into(), 2, 0)],
            ..Default::default()
        };

        let (status, out, err) = run_captured(&mut backend);
        assert_eq!(status, EXIT_SUCCESS);
        assert!(out.ends_with("[ALSA] *\n"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_init_failure_message_and_status() {
        let mut backend = StubBackend {
            init_error: Some("Host unavailable"),
            ..Default::default()
        };

        let (status, out, err) = run_captured(&mut backend);
        assert_eq!(status, EXIT_FAILURE);
        assert!(out.is_empty());
        assert_eq!(err, "Audio init failed: Host unavailable\n");
        assert!(!backend.terminated);
    }

    #[test]
    fn test_enumeration_failure_message_and_status() {
        let mut backend = StubBackend {
            count_error: Some("Invalid device count"),
            devices: vec![DeviceInfo::new("default".into(), 2, 0)],
            ..Default::default()
        };

        let (status, out, err) = run_captured(&mut backend);
        assert_eq!(status, EXIT_FAILURE);
        assert!(out.is_empty());
        assert_eq!(err, "Audio error: Invalid device count\n");
        assert!(backend.terminated);
    }

    #[test]
    fn test_write_failure_message_and_status() {
        let mut backend = StubBackend {
            devices: vec![DeviceInfo::new("default".into(), 2, 0)],
            ..Default::default()
        };
        let mut err = Vec::new();

        let status = run(&mut backend, &mut BrokenPipe, &mut err);
        assert_eq!(status, EXIT_FAILURE);
        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with("Audio error: "));
        assert!(err.contains("stdout closed"));
    }
}
