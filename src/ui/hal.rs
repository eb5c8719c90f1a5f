//! Hardware capabilities the menu core needs from the board.
//!
//! The core never touches registers directly.  The firmware binds these
//! traits to Embassy GPIO / timer / SSD1306 types; host tests bind them to
//! scripted fakes.

use crate::ui::latch::ButtonEvent;

/// Digital inputs, one per button.
pub trait ButtonPins {
    /// Current level of `button`'s pin, `true` meaning pressed.
    ///
    /// Implementations handle active-low wiring themselves.
    fn read_pin(&mut self, button: ButtonEvent) -> bool;
}

/// Coarse status indicator written from the main loop.
pub trait StatusPort {
    fn write_output(&mut self, pattern: u8);
}

/// Single heartbeat bit toggled from the tick context.
pub trait HeartbeatPin {
    fn toggle_heartbeat(&mut self);
}

/// Periodic tick source.
pub trait PeriodicTimer {
    /// (Re)arm the timer to fire every `period_ms`.
    fn arm_timer(&mut self, period_ms: u32);
}

/// Character display.  Latency and correctness are the driver's problem.
pub trait CharDisplay {
    fn clear(&mut self);
    fn set_cursor(&mut self, col: u8, row: u8);
    fn print_text(&mut self, text: &str);
    fn print_number(&mut self, value: u8);
}
