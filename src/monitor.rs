use core::fmt;

use thiserror::Error;

use crate::types::ActiveOrdinal;

/// Error type for monitor enumeration
#[derive(Error, Debug)]
pub enum MonitorError {
    #[cfg(target_os = "windows")]
    #[error("Error when calling the Windows API")]
    WinAPI(#[from] winsafe::co::ERROR),
}

/// A connected, active monitor as reported by the OS.
///
/// Constructed fresh on every enumeration call; holds no identity beyond the
/// current process's view of the OS state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monitor {
    /// The device slot this monitor was enumerated from
    pub index: usize,
    /// The OS device identifier, e.g. `\\.\DISPLAY1`
    pub device_name: String,
    /// The human-readable device description
    pub display_name: String,
    pub is_primary: bool,
    pub is_active: bool,
}

impl fmt::Display for Monitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Monitor {{ name: {}, string: {}, active: {}, primary: {} }}",
            self.device_name, self.display_name, self.is_active, self.is_primary
        )
    }
}

/// A snapshot of the active monitors, in enumeration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorSet {
    monitors: Vec<Monitor>,
}

impl MonitorSet {
    pub fn new(monitors: Vec<Monitor>) -> Self {
        Self { monitors }
    }

    /// Iterates over the monitors in this set
    pub fn monitors(&self) -> impl ExactSizeIterator<Item = &Monitor> {
        self.monitors.iter()
    }

    pub fn as_slice(&self) -> &[Monitor] {
        &self.monitors
    }

    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }

    /// Returns the monitor with the given 1-based ordinal, if in range
    pub fn get(&self, ordinal: ActiveOrdinal) -> Option<&Monitor> {
        self.monitors.get(ordinal.index())
    }

    /// Returns the primary monitor, falling back to the first enumerated
    /// monitor if the OS flagged none as primary
    pub fn primary_or_first(&self) -> Option<&Monitor> {
        self.monitors
            .iter()
            .find(|m| m.is_primary)
            .or_else(|| self.monitors.first())
    }
}

impl fmt::Display for MonitorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MonitorSet {{ monitors: [")?;
        for (i, monitor) in self.monitors.iter().enumerate() {
            if i > 0 {
                writeln!(f, ", ")?;
            }
            write!(f, "    {}", monitor)?;
        }
        write!(f, "\n] }}")
    }
}

#[cfg(target_os = "windows")]
mod windows_impl {
    use winsafe::{DISPLAY_DEVICE, EnumDisplayDevices, co, prelude::NativeBitflag};

    use super::{Monitor, MonitorError, MonitorSet};

    impl Monitor {
        fn from_winsafe(index: usize, device: &DISPLAY_DEVICE) -> Monitor {
            Monitor {
                index,
                device_name: device.DeviceName(),
                display_name: device.DeviceString(),
                is_primary: device.StateFlags.has(co::DISPLAY_DEVICE::PRIMARY_DEVICE),
                is_active: device.StateFlags.has(co::DISPLAY_DEVICE::ACTIVE),
            }
        }
    }

    /// Enumerates the active monitors.
    ///
    /// Walks device slots starting at 0 until the OS reports no more devices,
    /// keeping only devices flagged active. An empty set simply means zero
    /// active monitors, not an error.
    pub fn query_monitors() -> Result<MonitorSet, MonitorError> {
        let mut result = Vec::<Monitor>::new();

        let mut dev_num: u32 = 0;
        let mut display_device = DISPLAY_DEVICE::default();

        loop {
            let is_good = EnumDisplayDevices(None, dev_num, &mut display_device, co::EDD::NoValue)?;

            if !is_good {
                break;
            }

            log::debug!(
                "{}: {} - {}",
                dev_num,
                display_device.DeviceName(),
                display_device.DeviceString()
            );

            if display_device.StateFlags.has(co::DISPLAY_DEVICE::ACTIVE) {
                result.push(Monitor::from_winsafe(dev_num as usize, &display_device));
            }

            dev_num += 1; // advance to next display device
        }

        Ok(MonitorSet::new(result))
    }
}

#[cfg(target_os = "windows")]
pub use windows_impl::query_monitors;
