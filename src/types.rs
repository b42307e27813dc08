use core::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors that occur while parsing an ordinal from a string
#[derive(Error, Debug)]
pub enum ParseOrdinalError {
    #[error("Error parsing integer")]
    IntError(#[from] std::num::ParseIntError),
    #[error("Monitor numbers start at 1")]
    Zero,
}

/// A 1-based position in the *active monitor* numbering domain, as produced
/// by enumeration.
///
/// This is a different numbering domain than [`OutputOrdinal`]: the two must
/// not be mixed, since HDR operations count only external outputs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActiveOrdinal(u32);

/// A 1-based position in the *external output* numbering domain used by the
/// HDR operations. Internal panels are not counted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OutputOrdinal(u32);

macro_rules! ordinal_impls {
    ($name:ident) => {
        impl $name {
            /// Creates an ordinal; returns `None` for 0
            pub fn new(n: u32) -> Option<Self> {
                if n == 0 { None } else { Some(Self(n)) }
            }

            /// The 1-based number
            pub fn get(self) -> u32 {
                self.0
            }

            /// The 0-based index into the corresponding sequence
            pub fn index(self) -> usize {
                (self.0 - 1) as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseOrdinalError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                let n: u32 = s.trim().parse()?;
                Self::new(n).ok_or(ParseOrdinalError::Zero)
            }
        }
    };
}

ordinal_impls!(ActiveOrdinal);
ordinal_impls!(OutputOrdinal);

/// Multi-monitor layout to apply
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Tile the desktop across all monitors, left to right
    Extend,
    /// Mirror the primary monitor's settings onto all others
    Clone,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Extend => write!(f, "extend"),
            Layout::Clone => write!(f, "clone"),
        }
    }
}

/// Errors that occur while parsing a layout from a string
#[derive(Error, Debug)]
pub enum ParseLayoutError {
    #[error("Invalid layout. Allowed values: `extend`, `clone`")]
    InvalidLayout,
}

impl FromStr for Layout {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "extend" | "extended" => Ok(Layout::Extend),
            "clone" | "duplicate" => Ok(Layout::Clone),
            _ => Err(ParseLayoutError::InvalidLayout),
        }
    }
}

/// Display output technology, as reported in
/// `DISPLAYCONFIG_TARGET_DEVICE_NAME::outputTechnology`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OutputTechnology {
    HD15 = 0, // VGA
    SVideo = 1,
    CompositeVideo = 2,
    ComponentVideo = 3,
    DVI = 4,
    HDMI = 5,
    LVDS = 6,
    DJpn = 8,
    SDI = 9,
    DisplayPortExternal = 10,
    DisplayPortEmbedded = 11,
    UDIExternal = 12,
    UDIEmbedded = 13,
    SDTVDongle = 14,
    Miracast = 15,
    IndirectWired = 16,
    IndirectVirtual = 17,
    Internal = -2147483648, // 0x80000000, built-in panel
    Other = -1,
}

impl OutputTechnology {
    pub fn from_value(value: i32) -> Self {
        match value {
            0 => OutputTechnology::HD15,
            1 => OutputTechnology::SVideo,
            2 => OutputTechnology::CompositeVideo,
            3 => OutputTechnology::ComponentVideo,
            4 => OutputTechnology::DVI,
            5 => OutputTechnology::HDMI,
            6 => OutputTechnology::LVDS,
            8 => OutputTechnology::DJpn,
            9 => OutputTechnology::SDI,
            10 => OutputTechnology::DisplayPortExternal,
            11 => OutputTechnology::DisplayPortEmbedded,
            12 => OutputTechnology::UDIExternal,
            13 => OutputTechnology::UDIEmbedded,
            14 => OutputTechnology::SDTVDongle,
            15 => OutputTechnology::Miracast,
            16 => OutputTechnology::IndirectWired,
            17 => OutputTechnology::IndirectVirtual,
            -2147483648 => OutputTechnology::Internal,
            _ => OutputTechnology::Other,
        }
    }

    /// Whether this is a built-in panel, which HDR ordinal numbering skips
    pub fn is_internal(&self) -> bool {
        matches!(self, OutputTechnology::Internal)
    }
}

impl fmt::Display for OutputTechnology {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OutputTechnology::HD15 => write!(f, "VGA (HD15)"),
            OutputTechnology::SVideo => write!(f, "S-Video"),
            OutputTechnology::CompositeVideo => write!(f, "Composite Video"),
            OutputTechnology::ComponentVideo => write!(f, "Component Video"),
            OutputTechnology::DVI => write!(f, "DVI"),
            OutputTechnology::HDMI => write!(f, "HDMI"),
            OutputTechnology::LVDS => write!(f, "LVDS"),
            OutputTechnology::DJpn => write!(f, "D-Jpn"),
            OutputTechnology::SDI => write!(f, "SDI"),
            OutputTechnology::DisplayPortExternal => write!(f, "DisplayPort (External)"),
            OutputTechnology::DisplayPortEmbedded => write!(f, "DisplayPort (Embedded)"),
            OutputTechnology::UDIExternal => write!(f, "UDI (External)"),
            OutputTechnology::UDIEmbedded => write!(f, "UDI (Embedded)"),
            OutputTechnology::SDTVDongle => write!(f, "SDTV Dongle"),
            OutputTechnology::Miracast => write!(f, "Miracast"),
            OutputTechnology::IndirectWired => write!(f, "Indirect Wired"),
            OutputTechnology::IndirectVirtual => write!(f, "Indirect Virtual"),
            OutputTechnology::Internal => write!(f, "Internal"),
            OutputTechnology::Other => write!(f, "Other"),
        }
    }
}

/// One entry of the interactive menu
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    ShowMonitors,
    Extend,
    Clone,
    ActivateOne,
    ToggleHdr,
    Exit,
}

/// Errors that occur while parsing a menu choice from a string
#[derive(Error, Debug)]
pub enum ParseMenuChoiceError {
    #[error("Error parsing integer")]
    IntError(#[from] std::num::ParseIntError),
    #[error("Unknown menu option: {0}")]
    UnknownOption(u32),
}

impl FromStr for MenuChoice {
    type Err = ParseMenuChoiceError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().parse::<u32>()? {
            1 => Ok(MenuChoice::ShowMonitors),
            2 => Ok(MenuChoice::Extend),
            3 => Ok(MenuChoice::Clone),
            4 => Ok(MenuChoice::ActivateOne),
            5 => Ok(MenuChoice::ToggleHdr),
            6 => Ok(MenuChoice::Exit),
            other => Err(ParseMenuChoiceError::UnknownOption(other)),
        }
    }
}
