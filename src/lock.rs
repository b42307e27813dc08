use std::sync::{Mutex, MutexGuard};

/// Guards the OS display configuration database.
///
/// Windows gives no atomicity across a query/apply pair, so every
/// read-modify-write sequence (query topology, patch in memory, apply) must
/// hold this lock for its whole duration. The scope is this process only;
/// other processes can still race.
static DISPLAY_CONFIG: Mutex<()> = Mutex::new(());

pub(crate) fn display_config_lock() -> MutexGuard<'static, ()> {
    DISPLAY_CONFIG
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
