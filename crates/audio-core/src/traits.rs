use crate::device::{DeviceIndex, DeviceInfo, HostApiIndex, HostApiInfo};
use crate::error::AudioError;

/// Trait for native audio subsystems that can enumerate devices
///
/// Implementations hold whatever global state the subsystem needs between
/// `initialize` and `terminate`. Prefer [`crate::AudioSession`] over calling
/// those two directly.
pub trait AudioBackend {
    /// Start the subsystem
    fn initialize(&mut self) -> Result<(), AudioError>;

    /// Shut the subsystem down. Backend failures here are logged, not returned.
    fn terminate(&mut self);

    /// Total number of devices, output capable or not
    fn device_count(&mut self) -> Result<usize, AudioError>;

    /// Index of the system default output device, if there is one
    fn default_output_device(&self) -> Option<DeviceIndex>;

    /// Descriptive record for a device, `None` if unavailable
    fn device_info(&self, index: DeviceIndex) -> Option<DeviceInfo>;

    /// Descriptive record for a host API, `None` if unavailable
    fn host_api_info(&self, host_api: HostApiIndex) -> Option<HostApiInfo>;
}
