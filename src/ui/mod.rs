//! User interface subsystem - four buttons, status LEDs and an OLED.
//!
//! The tick task samples the buttons every 10 ms and latches clean
//! presses; the main task drains the latch into the menu state machine,
//! which redraws the display and the status LEDs.
//!
//! ## Components
//!
//! - **Buttons**: 4 tactile switches (MENU, ENTER, UP, DOWN), debounced
//!   in the tick task
//! - **Display**: SSD1306 128×64 OLED via I²C, used as a 16×2 character grid
//! - **LEDs**: 3 status LEDs showing the active screen, 1 heartbeat LED

pub mod buttons;
pub mod debounce;
pub mod display;
pub mod hal;
pub mod latch;
pub mod leds;
pub mod menu;
pub mod tick;

pub use latch::{ButtonEvent, EventLatch, EventSet};
