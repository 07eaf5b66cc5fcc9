mod device;
mod error;
mod lister;
mod session;
mod traits;

#[cfg(test)]
mod mock;

pub use device::{DeviceIndex, DeviceInfo, HostApiIndex, HostApiInfo, OutputDevice, UNKNOWN_HOST_API};
pub use error::{AudioError, ListError};
pub use lister::{list_output_devices, write_output_devices};
pub use session::AudioSession;
pub use traits::AudioBackend;
