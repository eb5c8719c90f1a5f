//! Application-wide constants and compile-time configuration.
//!
//! All pin assignments, timing parameters and menu defaults live here so
//! they can be tuned in one place.

// Tick source

/// Period of the sampling tick (ms).
pub const TICK_PERIOD_MS: u32 = 10;

/// Identical consecutive samples needed before a button level is committed.
/// 5 samples at 10 ms = 50 ms of settled contact.
pub const DEBOUNCE_THRESHOLD: u8 = 5;

/// Ticks between heartbeat toggles. 100 × 10 ms = 1 s.
pub const HEARTBEAT_TICKS: u16 = 100;

// Startup

/// How long every indicator is held on at power-up (ms).
pub const SELF_TEST_MS: u64 = 3_000;

/// How long the splash message stays up before the first screen (ms).
pub const SPLASH_MS: u64 = 2_000;

/// Splash text shown while the board settles.
pub const SPLASH_TEXT: &str = "Ready to go";

/// Text shown when the state machine lands in an unknown state.
pub const PROBLEM_TEXT: &str = "Problem";

// Indicator patterns

/// Pattern written to the status port during the self-test.
pub const SELF_TEST_PATTERN: u8 = 0xFF;

/// Pattern written for an unknown menu state.
pub const UNKNOWN_STATE_PATTERN: u8 = 0x05;

// Display geometry (character cells)

pub const DISPLAY_COLS: usize = 16;
pub const DISPLAY_ROWS: usize = 2;

/// Column at which values are printed.
pub const VALUE_COLUMN: u8 = 10;

// Menu

/// Committed values at power-up, one per menu state (A, B, C, D).
pub const INITIAL_VALUES: [u8; 4] = [20, 30, 40, 50];

/// Upper bound for the edited value. `None` lets the byte wrap.
pub const VALUE_CEILING: Option<u8> = None;

// GPIO pin assignments (nRF52840-DK defaults)
//
// Logical names only; the concrete `embassy_nrf::peripherals::*` are picked
// in `main.rs`.  Buttons are active-low with internal pull-up.
//
//   Button MENU    → P0.11
//   Button ENTER   → P0.12
//   Button UP      → P0.24
//   Button DOWN    → P0.25
//   Status LED 1-3 → P0.13, P0.14, P0.15  (pattern bits 0-2)
//   Heartbeat LED  → P0.16
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
