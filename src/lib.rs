//! A library to manage monitor configuration through the Windows API.
//!
//! This library wraps the two Windows display subsystems behind one surface:
//! the legacy `DISPLAY_DEVICE`/`DEVMODE` calls for enumeration, layout
//! switching and single-display activation, and the Display Configuration
//! API for HDR signal toggling.
//!
//! Every operation is stateless per call: the full topology is re-queried
//! before patching and reapplied immediately after, never holding a stale
//! copy across other mutations. Mutating operations serialize on a
//! process-wide lock because the OS gives no atomicity across a query/apply
//! pair; callers in other processes can still race.
//!
//! Note that two distinct numbering domains exist:
//! [`ActiveOrdinal`] counts all active monitors, while [`OutputOrdinal`]
//! counts only external (non-internal-panel) outputs and is used by the HDR
//! operations.

mod hdr;
mod layout;
#[cfg(target_os = "windows")]
mod lock;
mod monitor;
mod types;

pub use hdr::*;
pub use layout::*;
pub use monitor::*;
pub use types::*;
