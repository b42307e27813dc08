use core::fmt;

use thiserror::Error;

use crate::types::{OutputOrdinal, OutputTechnology};

/// Error type for HDR operations
#[derive(Error, Debug)]
pub enum HdrError {
    #[error("Output {requested} is out of range; {available} external outputs found")]
    NoSuchOutput { requested: u32, available: u32 },
    #[error("No mode record matches the selected output")]
    NoMatchingMode,
    #[cfg(target_os = "windows")]
    #[error("Error when calling the Windows API: {0}")]
    WinAPI(String),
    #[cfg(target_os = "windows")]
    #[error("Failed to apply the display configuration; returned code: {0}")]
    FailedToCommit(i32),
}

type Result<T = ()> = std::result::Result<T, HdrError>;

/// The HDR support bit inside a mode's video signal info dword
pub const VSIF_SUPPORT_HDR: u32 = 0x0000_0800;

/// Sets or clears the HDR support bit.
///
/// A pure bit flip: enabling then disabling restores the original value
/// bit for bit.
pub fn with_hdr_bit(signal_info: u32, enable: bool) -> u32 {
    if enable {
        signal_info | VSIF_SUPPORT_HDR
    } else {
        signal_info & !VSIF_SUPPORT_HDR
    }
}

/// Resolves a 1-based external-output ordinal over a sequence of output
/// technologies in path order.
///
/// Internal panels are skipped and not counted; the returned value is the
/// position in the *full* sequence of the n-th non-internal entry.
pub fn nth_external(technologies: &[OutputTechnology], ordinal: OutputOrdinal) -> Option<usize> {
    technologies
        .iter()
        .enumerate()
        .filter(|(_, tech)| !tech.is_internal())
        .map(|(idx, _)| idx)
        .nth(ordinal.index())
}

/// An external output eligible for HDR toggling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HdrOutput {
    /// 1-based position in the external-only numbering domain
    pub ordinal: OutputOrdinal,
    /// The monitor's friendly device name
    pub name: String,
    pub technology: OutputTechnology,
}

impl fmt::Display for HdrOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.ordinal, self.name, self.technology)
    }
}

#[cfg(target_os = "windows")]
mod windows_impl {
    use windows::Win32::Devices::Display::{
        DISPLAYCONFIG_DEVICE_INFO_GET_TARGET_NAME, DISPLAYCONFIG_MODE_INFO,
        DISPLAYCONFIG_MODE_INFO_TYPE_TARGET, DISPLAYCONFIG_PATH_INFO,
        DISPLAYCONFIG_TARGET_DEVICE_NAME, DisplayConfigGetDeviceInfo, GetDisplayConfigBufferSizes,
        QDC_ONLY_ACTIVE_PATHS, QueryDisplayConfig, SDC_APPLY, SDC_USE_DATABASE_CURRENT,
        SetDisplayConfig,
    };

    use super::{HdrError, HdrOutput, Result, nth_external, with_hdr_bit};
    use crate::lock::display_config_lock;
    use crate::types::{OutputOrdinal, OutputTechnology};

    // DISPLAYCONFIG_PATH_ACTIVE
    const PATH_ACTIVE: u32 = 0x0000_0001;

    /// Queries the full active path/mode topology.
    ///
    /// Two-call protocol: the first call sizes the buffers, the second fills
    /// them. The fill call requires exact-sized buffers from the sizing call.
    fn query_paths_and_modes() -> Result<(Vec<DISPLAYCONFIG_PATH_INFO>, Vec<DISPLAYCONFIG_MODE_INFO>)>
    {
        let mut num_paths: u32 = 0;
        let mut num_modes: u32 = 0;

        unsafe {
            GetDisplayConfigBufferSizes(QDC_ONLY_ACTIVE_PATHS, &mut num_paths, &mut num_modes)
                .ok()
                .map_err(|e| {
                    HdrError::WinAPI(format!("GetDisplayConfigBufferSizes failed: {:?}", e))
                })?;
        }

        log::debug!("Display config: {} paths, {} modes", num_paths, num_modes);

        let mut paths = vec![DISPLAYCONFIG_PATH_INFO::default(); num_paths as usize];
        let mut modes = vec![DISPLAYCONFIG_MODE_INFO::default(); num_modes as usize];

        unsafe {
            QueryDisplayConfig(
                QDC_ONLY_ACTIVE_PATHS,
                &mut num_paths,
                paths.as_mut_ptr(),
                &mut num_modes,
                modes.as_mut_ptr(),
                None,
            )
            .ok()
            .map_err(|e| HdrError::WinAPI(format!("QueryDisplayConfig failed: {:?}", e)))?;
        }

        // Truncate to actual returned counts
        paths.truncate(num_paths as usize);
        modes.truncate(num_modes as usize);

        Ok((paths, modes))
    }

    fn wide_to_string(wide: &[u16]) -> String {
        let len = wide.iter().position(|&c| c == 0).unwrap_or(wide.len());
        String::from_utf16_lossy(&wide[..len])
    }

    /// Queries the target device info of one path
    fn query_target_name(
        path: &DISPLAYCONFIG_PATH_INFO,
    ) -> Result<DISPLAYCONFIG_TARGET_DEVICE_NAME> {
        let mut target = DISPLAYCONFIG_TARGET_DEVICE_NAME::default();
        target.header.adapterId = path.targetInfo.adapterId;
        target.header.id = path.targetInfo.id;
        target.header.r#type = DISPLAYCONFIG_DEVICE_INFO_GET_TARGET_NAME;
        target.header.size = std::mem::size_of::<DISPLAYCONFIG_TARGET_DEVICE_NAME>() as u32;

        let code = unsafe { DisplayConfigGetDeviceInfo(&mut target.header) };
        if code != 0 {
            return Err(HdrError::WinAPI(format!(
                "DisplayConfigGetDeviceInfo failed: error code {}",
                code
            )));
        }

        Ok(target)
    }

    /// The output technology of each path, in path order
    fn path_technologies(paths: &[DISPLAYCONFIG_PATH_INFO]) -> Vec<OutputTechnology> {
        paths
            .iter()
            .map(|path| match query_target_name(path) {
                Ok(target) => OutputTechnology::from_value(target.outputTechnology.0),
                Err(e) => {
                    log::warn!("skipping path with unreadable target: {}", e);
                    OutputTechnology::Other
                }
            })
            .collect()
    }

    /// Lists the external outputs eligible for HDR toggling, in path order.
    ///
    /// This is the numbering domain used by [`set_hdr`]; it differs from the
    /// active-monitor domain because internal panels are not counted.
    pub fn query_outputs() -> Result<Vec<HdrOutput>> {
        let (paths, _modes) = query_paths_and_modes()?;

        let mut outputs = Vec::new();
        for path in &paths {
            let target = match query_target_name(path) {
                Ok(target) => target,
                Err(e) => {
                    log::warn!("skipping path with unreadable target: {}", e);
                    continue;
                }
            };

            let technology = OutputTechnology::from_value(target.outputTechnology.0);
            if technology.is_internal() {
                continue;
            }

            // post-filter position, so the ordinal is always valid
            let ordinal = OutputOrdinal::new(outputs.len() as u32 + 1).unwrap();
            outputs.push(HdrOutput {
                ordinal,
                name: wide_to_string(&target.monitorFriendlyDeviceName),
                technology,
            });
        }

        Ok(outputs)
    }

    /// Toggles HDR signaling on the n-th external output.
    ///
    /// Re-queries the full topology, flips the HDR support bit in the
    /// matching target mode's signal info, marks the path active, and
    /// resubmits the complete path/mode arrays in one apply call. Partial
    /// updates are not supported by the platform.
    pub fn set_hdr(ordinal: OutputOrdinal, enable: bool) -> Result<()> {
        let _guard = display_config_lock();

        let (mut paths, mut modes) = query_paths_and_modes()?;

        let technologies = path_technologies(&paths);
        let available = technologies.iter().filter(|t| !t.is_internal()).count() as u32;

        let path_idx =
            nth_external(&technologies, ordinal).ok_or(HdrError::NoSuchOutput {
                requested: ordinal.get(),
                available,
            })?;

        let target_adapter = paths[path_idx].targetInfo.adapterId;
        let mode_idx = unsafe { paths[path_idx].targetInfo.Anonymous.modeInfoIdx };

        let mode = modes
            .iter_mut()
            .find(|mode| {
                mode.infoType == DISPLAYCONFIG_MODE_INFO_TYPE_TARGET
                    && mode.adapterId.LowPart == target_adapter.LowPart
                    && mode.adapterId.HighPart == target_adapter.HighPart
                    && mode.id == mode_idx
            })
            .ok_or(HdrError::NoMatchingMode)?;

        unsafe {
            let signal = &mut mode.Anonymous.targetMode.targetVideoSignalInfo;
            signal.Anonymous.videoStandard = with_hdr_bit(signal.Anonymous.videoStandard, enable);
        }

        paths[path_idx].flags |= PATH_ACTIVE;

        let result = unsafe {
            SetDisplayConfig(Some(&paths), Some(&modes), SDC_APPLY | SDC_USE_DATABASE_CURRENT)
        };

        if result == 0 {
            log::info!(
                "HDR {} for output {}",
                if enable { "enabled" } else { "disabled" },
                ordinal
            );
            Ok(())
        } else {
            log::error!("Failed to apply display configuration: error code {}", result);
            Err(HdrError::FailedToCommit(result))
        }
    }
}

#[cfg(target_os = "windows")]
pub use windows_impl::{query_outputs, set_hdr};
