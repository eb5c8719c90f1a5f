//! Unified error type for the firmware.
//!
//! The menu core is total and never returns errors; only hardware
//! bring-up does.  No `alloc` - variants carry only fixed-size data.

use defmt::Format;
use embassy_executor::SpawnError;

/// Top-level error type used by board bring-up.
#[derive(Debug, Format)]
pub enum Error {
    /// I²C transaction to the display failed.
    Display,

    /// The executor had no room for a task.
    Spawn,
}

impl From<SpawnError> for Error {
    fn from(_: SpawnError) -> Self {
        Error::Spawn
    }
}
