//! In-memory backend for exercising the listing procedure

use crate::device::{DeviceIndex, DeviceInfo, HostApiIndex, HostApiInfo};
use crate::error::AudioError;
use crate::traits::AudioBackend;

#[derive(Debug, Default)]
pub struct MockBackend {
    pub devices: Vec<Option<DeviceInfo>>,
    pub host_apis: Vec<HostApiInfo>,
    pub default_output: Option<DeviceIndex>,
    pub initialize_error: Option<String>,
    pub count_error: Option<String>,

    pub initialized: bool,
    pub initialize_calls: usize,
    pub terminate_calls: usize,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn host_api(mut self, name: &str) -> Self {
        self.host_apis.push(HostApiInfo::new(name));
        self
    }

    pub fn device(mut self, name: &str, max_output_channels: u16, host_api: HostApiIndex) -> Self {
        self.devices
            .push(Some(DeviceInfo::new(name.to_string(), max_output_channels, host_api)));
        self
    }

    pub fn missing_device(mut self) -> Self {
        self.devices.push(None);
        self
    }

    pub fn default_output(mut self, index: DeviceIndex) -> Self {
        self.default_output = Some(index);
        self
    }

    pub fn fail_initialize(mut self, text: &str) -> Self {
        self.initialize_error = Some(text.to_string());
        self
    }

    pub fn fail_count(mut self, text: &str) -> Self {
        self.count_error = Some(text.to_string());
        self
    }
}

impl AudioBackend for MockBackend {
    fn initialize(&mut self) -> Result<(), AudioError> {
        self.initialize_calls += 1;
        if let Some(text) = &self.initialize_error {
            return Err(AudioError::Initialization(text.clone()));
        }
        self.initialized = true;
        Ok(())
    }

    fn terminate(&mut self) {
        self.terminate_calls += 1;
        self.initialized = false;
    }

    fn device_count(&mut self) -> Result<usize, AudioError> {
        assert!(self.initialized, "device_count called outside a session");
        match &self.count_error {
            Some(text) => Err(AudioError::Enumeration(text.clone())),
            None => Ok(self.devices.len()),
        }
    }

    fn default_output_device(&self) -> Option<DeviceIndex> {
        self.default_output
    }

    fn device_info(&self, index: DeviceIndex) -> Option<DeviceInfo> {
        self.devices.get(index).cloned().flatten()
    }

    fn host_api_info(&self, host_api: HostApiIndex) -> Option<HostApiInfo> {
        self.host_apis.get(host_api).cloned()
    }
}
