use cpal::traits::{DeviceTrait, HostTrait};
use cpal::{Host, HostId};
use systools_audio_core::{AudioBackend, AudioError, DeviceIndex, DeviceInfo, HostApiIndex, HostApiInfo};

/// Audio subsystem over every cpal host available on this platform
#[derive(Default)]
pub struct CpalBackend {
    hosts: Vec<Host>,
    default_host: Option<HostId>,
    // One slot per enumerated device, `None` where the record could not be read
    devices: Vec<Option<DeviceInfo>>,
}

impl CpalBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_initialized(&self) -> bool {
        !self.hosts.is_empty()
    }

    /// Name and widest output channel count, `None` if the name is unreadable
    fn describe(device: &cpal::Device) -> Option<(String, u16)> {
        let name = match device.name() {
            Ok(name) => name,
            Err(e) => {
                tracing::debug!("Unreadable device name: {}", e);
                return None;
            }
        };

        let max_output_channels = match device.supported_output_configs() {
            Ok(configs) => widest(configs.map(|config| config.channels())),
            Err(e) => {
                tracing::debug!("No output configs for {}: {}", name, e);
                0
            }
        };

        Some((name, max_output_channels))
    }
}

/// Largest channel count offered, 0 when nothing is offered
fn widest(channels: impl IntoIterator<Item = u16>) -> u16 {
    channels.into_iter().max().unwrap_or(0)
}

/// Lay the devices of every host out in one index space, host by host
fn number_devices<H, D>(hosts: H) -> Vec<Option<DeviceInfo>>
where
    H: IntoIterator<Item = D>,
    D: IntoIterator<Item = Option<(String, u16)>>,
{
    hosts
        .into_iter()
        .enumerate()
        .flat_map(|(host_api, devices)| {
            devices.into_iter().map(move |device| {
                device.map(|(name, channels)| DeviceInfo::new(name, channels, host_api))
            })
        })
        .collect()
}

/// Index of the device called `name` on `host_api`
fn find_default(devices: &[Option<DeviceInfo>], host_api: HostApiIndex, name: &str) -> Option<DeviceIndex> {
    devices.iter().position(|slot| {
        slot.as_ref()
            .is_some_and(|info| info.host_api == host_api && info.name == name)
    })
}

impl AudioBackend for CpalBackend {
    fn initialize(&mut self) -> Result<(), AudioError> {
        let mut last_error = None;

        for id in cpal::available_hosts() {
            match cpal::host_from_id(id) {
                Ok(host) => {
                    tracing::debug!("Opened audio host {}", id.name());
                    self.hosts.push(host);
                }
                Err(e) => {
                    tracing::warn!("Audio host {} unavailable: {}", id.name(), e);
                    last_error = Some(e.to_string());
                }
            }
        }

        if self.hosts.is_empty() {
            return Err(AudioError::Initialization(
                last_error.unwrap_or_else(|| "no audio host available".to_string()),
            ));
        }

        self.default_host = Some(cpal::default_host().id());
        Ok(())
    }

    fn terminate(&mut self) {
        self.devices.clear();
        self.hosts.clear();
        self.default_host = None;
    }

    fn device_count(&mut self) -> Result<usize, AudioError> {
        if !self.is_initialized() {
            return Err(AudioError::Enumeration("audio subsystem not initialized".to_string()));
        }

        let mut per_host = Vec::with_capacity(self.hosts.len());
        for host in &self.hosts {
            let devices = host.devices().map_err(|e| {
                AudioError::Enumeration(format!("{}: {}", host.id().name(), e))
            })?;
            per_host.push(devices.map(|device| Self::describe(&device)).collect::<Vec<_>>());
        }

        self.devices = number_devices(per_host);
        Ok(self.devices.len())
    }

    fn default_output_device(&self) -> Option<DeviceIndex> {
        let default_host = self.default_host?;
        let (host_api, host) = self
            .hosts
            .iter()
            .enumerate()
            .find(|(_, host)| host.id() == default_host)?;
        let name = host.default_output_device()?.name().ok()?;

        find_default(&self.devices, host_api, &name)
    }

    fn device_info(&self, index: DeviceIndex) -> Option<DeviceInfo> {
        self.devices.get(index).cloned().flatten()
    }

    fn host_api_info(&self, host_api: HostApiIndex) -> Option<HostApiInfo> {
        self.hosts
            .get(host_api)
            .map(|host| HostApiInfo::new(host.id().name()))
    }
}
