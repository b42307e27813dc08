use thiserror::Error;

use crate::monitor::{Monitor, MonitorError};
use crate::types::ActiveOrdinal;

/// Error type for layout and activation operations
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Error during monitor enumeration")]
    Enumeration(#[from] MonitorError),
    #[error("No active monitors reported by the OS")]
    NoMonitors,
    #[error("Monitor {requested} is out of range; {available} active monitors available")]
    InvalidOrdinal { requested: u32, available: usize },
    #[cfg(target_os = "windows")]
    #[error("Error when calling the Windows API")]
    WinAPI(#[from] winsafe::co::ERROR),
    #[cfg(target_os = "windows")]
    #[error("Mode test for {device} was rejected; returned flags: {code}")]
    TestRejected {
        device: String,
        code: winsafe::co::DISP_CHANGE,
    },
    #[cfg(target_os = "windows")]
    #[error("Failed to apply settings on {device}; returned flags: {code}")]
    ApplyFailed {
        device: String,
        code: winsafe::co::DISP_CHANGE,
    },
}

type Result<T = ()> = std::result::Result<T, LayoutError>;

/// Computes the horizontal offsets for left-to-right tiling.
///
/// Each monitor is placed at the cumulative width of all monitors before it,
/// starting at zero, in enumeration order.
pub fn tile_offsets(widths: &[u32]) -> Vec<i32> {
    let mut offsets = Vec::with_capacity(widths.len());
    let mut x_pos: i32 = 0;
    for width in widths {
        offsets.push(x_pos);
        x_pos += *width as i32;
    }
    offsets
}

/// Resolves the monitor that `activate_only` keeps active.
///
/// Fails without any side effect when the ordinal is outside the range of the
/// given snapshot.
pub fn activation_target(monitors: &[Monitor], ordinal: ActiveOrdinal) -> Result<usize> {
    if monitors.is_empty() {
        return Err(LayoutError::NoMonitors);
    }
    if ordinal.index() >= monitors.len() {
        return Err(LayoutError::InvalidOrdinal {
            requested: ordinal.get(),
            available: monitors.len(),
        });
    }
    Ok(ordinal.index())
}

#[cfg(target_os = "windows")]
mod windows_impl {
    use winsafe::{GmidxEnum, POINT, co};

    use super::{LayoutError, Result, activation_target, tile_offsets};
    use crate::lock::display_config_lock;
    use crate::monitor::{Monitor, MonitorSet, query_monitors};
    use crate::types::{ActiveOrdinal, Layout};

    /// Reads the current settings of a monitor
    fn fetch_devmode(device_name: &str) -> Result<winsafe::DEVMODE> {
        let mut devmode = winsafe::DEVMODE::default();
        winsafe::EnumDisplaySettings(
            Some(device_name),
            GmidxEnum::Enum(co::ENUM_SETTINGS::CURRENT),
            &mut devmode,
        )?;
        Ok(devmode)
    }

    /// Applies a devmode to a monitor, persisting to the registry, and maps
    /// a rejected change to an error naming the monitor
    fn apply_devmode(
        device_name: &str,
        devmode: &mut winsafe::DEVMODE,
        flags: co::CDS,
    ) -> Result<()> {
        match winsafe::ChangeDisplaySettingsEx(Some(device_name), Some(devmode), flags) {
            Ok(_) => Ok(()),
            Err(code) => Err(LayoutError::ApplyFailed {
                device: device_name.to_string(),
                code,
            }),
        }
    }

    /// Applies an extended or cloned multi-monitor layout.
    ///
    /// Re-queries the full monitor topology first; never reuses a snapshot
    /// from an earlier call. Persists to the OS display registry immediately.
    pub fn apply_layout(layout: Layout) -> Result<()> {
        let _guard = display_config_lock();

        let set = query_monitors()?;
        if set.is_empty() {
            return Err(LayoutError::NoMonitors);
        }

        match layout {
            Layout::Extend => extend(set.as_slice()),
            Layout::Clone => clone_from_primary(&set),
        }
    }

    /// Tiles all monitors left to right in enumeration order
    fn extend(monitors: &[Monitor]) -> Result<()> {
        let mut devmodes = Vec::with_capacity(monitors.len());
        for monitor in monitors {
            devmodes.push(fetch_devmode(&monitor.device_name)?);
        }

        let widths: Vec<u32> = devmodes.iter().map(|d| d.dmPelsWidth).collect();
        let offsets = tile_offsets(&widths);

        for ((monitor, devmode), x_pos) in monitors.iter().zip(&mut devmodes).zip(offsets) {
            devmode.set_dmPosition(POINT { x: x_pos, y: 0 });
            devmode.dmFields = co::DM::POSITION | co::DM::PELSWIDTH | co::DM::PELSHEIGHT;

            log::debug!("placing {} at x={}", monitor.device_name, x_pos);
            apply_devmode(&monitor.device_name, devmode, co::CDS::UPDATEREGISTRY)?;
        }

        Ok(())
    }

    /// Copies the primary monitor's settings onto every other monitor. The
    /// source monitor itself is never touched.
    fn clone_from_primary(set: &MonitorSet) -> Result<()> {
        // primary_or_first is Some, the set was checked non-empty
        let source = set.primary_or_first().ok_or(LayoutError::NoMonitors)?;
        let mut devmode = fetch_devmode(&source.device_name)?;
        devmode.dmFields =
            co::DM::POSITION | co::DM::PELSWIDTH | co::DM::PELSHEIGHT | co::DM::DISPLAYFREQUENCY;

        for monitor in set.monitors() {
            if monitor.index == source.index {
                continue;
            }

            log::debug!(
                "cloning {} onto {}",
                source.device_name,
                monitor.device_name
            );
            apply_devmode(&monitor.device_name, &mut devmode, co::CDS::UPDATEREGISTRY)?;
        }

        Ok(())
    }

    /// Keeps only the selected monitor active and deactivates all others.
    ///
    /// The selected monitor's settings are test-applied first; a rejected
    /// test aborts before anything has been mutated. Other monitors are
    /// turned off by zeroing their resolution (the OS convention for
    /// deactivating an output).
    pub fn activate_only(ordinal: ActiveOrdinal) -> Result<()> {
        let _guard = display_config_lock();

        let set = query_monitors()?;
        let keep = activation_target(set.as_slice(), ordinal)?;
        let selected = &set.as_slice()[keep];

        // two-phase for the kept monitor: a validate-only pass must succeed
        // before anything is persisted
        let mut devmode = fetch_devmode(&selected.device_name)?;
        devmode.dmFields = co::DM::PELSWIDTH | co::DM::PELSHEIGHT;

        let test = winsafe::ChangeDisplaySettingsEx(
            Some(&selected.device_name),
            Some(&mut devmode),
            co::CDS::UPDATEREGISTRY | co::CDS::TEST,
        );
        if let Err(code) = test {
            return Err(LayoutError::TestRejected {
                device: selected.device_name.clone(),
                code,
            });
        }

        apply_devmode(&selected.device_name, &mut devmode, co::CDS::UPDATEREGISTRY)?;
        log::info!("monitor {} activated", selected.device_name);

        for (i, monitor) in set.monitors().enumerate() {
            if i == keep {
                continue;
            }

            let mut devmode = fetch_devmode(&monitor.device_name)?;
            devmode.dmFields = co::DM::PELSWIDTH | co::DM::PELSHEIGHT;
            devmode.dmPelsWidth = 0;
            devmode.dmPelsHeight = 0;

            apply_devmode(&monitor.device_name, &mut devmode, co::CDS::UPDATEREGISTRY)?;
            log::debug!("monitor {} deactivated", monitor.device_name);
        }

        Ok(())
    }
}

#[cfg(target_os = "windows")]
pub use windows_impl::{activate_only, apply_layout};
