use crate::{AdminSettings, AdminStats};
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};

/// Shared counters and settings for one service instance.
///
/// Statistics and settings sit behind separate guards. No method holds both at
/// once, and every critical section only copies or bumps a few integers.
#[derive(Debug)]
pub struct CounterState {
    stats: Mutex<AdminStats>,
    settings: RwLock<AdminSettings>,
}

impl CounterState {
    /// Creates a state whose start time is now.
    pub fn new(settings: AdminSettings) -> Self {
        Self::with_start_time(Utc::now(), settings)
    }

    /// Creates a state with an explicit start time.
    pub fn with_start_time(start_time: DateTime<Utc>, settings: AdminSettings) -> Self {
        Self {
            stats: Mutex::new(AdminStats::new(start_time)),
            settings: RwLock::new(settings),
        }
    }

    /// Returns a copy of the current statistics.
    pub fn snapshot_stats(&self) -> AdminStats {
        *self.stats.lock()
    }

    /// Records one successful generation call of `count` identifiers.
    ///
    /// When `used_debug_mode` is set, the debug cursor is advanced by `count`
    /// and its value before the advance is returned: the caller owns the
    /// indices `start..start + count`. Otherwise the cursor is left alone and
    /// the returned value carries no meaning.
    pub fn apply_generation(&self, count: u64, used_debug_mode: bool) -> u64 {
        let mut stats = self.stats.lock();
        stats.num_requests += 1;
        stats.num_identifiers_issued += count;

        let start = stats.debug_sequence_cursor;
        if used_debug_mode {
            stats.debug_sequence_cursor += count;
        }
        start
    }

    /// Returns a copy of the current settings.
    pub fn settings(&self) -> AdminSettings {
        *self.settings.read()
    }

    /// Replaces the settings. Statistics are left untouched.
    pub fn set_settings(&self, settings: AdminSettings) {
        *self.settings.write() = settings;
    }
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new(AdminSettings::default())
    }
}
