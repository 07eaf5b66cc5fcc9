use std::fmt;

pub type DeviceIndex = usize;
pub type HostApiIndex = usize;

/// Placeholder printed when a device's host API record is unavailable
pub const UNKNOWN_HOST_API: &str = "?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub name: String,
    pub max_output_channels: u16,
    pub host_api: HostApiIndex,
}

impl DeviceInfo {
    pub fn new(name: String, max_output_channels: u16, host_api: HostApiIndex) -> Self {
        Self {
            name,
            max_output_channels,
            host_api,
        }
    }

    pub fn is_output(&self) -> bool {
        self.max_output_channels >= 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostApiInfo {
    pub name: String,
}

impl HostApiInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One row of the output device listing
///
/// Displays as `%3d  %-40s  [%s]%s`, the trailing ` *` marking the
/// default output device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDevice {
    pub index: DeviceIndex,
    pub name: String,
    pub host_api_name: String,
    pub is_default: bool,
}

impl fmt::Display for OutputDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.is_default { " *" } else { "" };
        write!(
            f,
            "{:>3}  {:<40}  [{}]{}",
            self.index, self.name, self.host_api_name, marker
        )
    }
}
