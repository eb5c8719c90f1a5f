//! Status and heartbeat LEDs (active-low on the nRF52840-DK).

use crate::ui::hal::{HeartbeatPin, StatusPort};
use embassy_nrf::gpio::{AnyPin, Level, Output, OutputDrive};

/// Three LEDs showing the low bits of the status pattern.
pub struct StatusLeds {
    leds: [Output<'static>; 3],
}

impl StatusLeds {
    pub fn new(led1: AnyPin, led2: AnyPin, led3: AnyPin) -> Self {
        Self {
            leds: [
                Output::new(led1, Level::High, OutputDrive::Standard),
                Output::new(led2, Level::High, OutputDrive::Standard),
                Output::new(led3, Level::High, OutputDrive::Standard),
            ],
        }
    }
}

impl StatusPort for StatusLeds {
    fn write_output(&mut self, pattern: u8) {
        for (bit, led) in self.leds.iter_mut().enumerate() {
            if pattern & (1 << bit) != 0 {
                led.set_low();
            } else {
                led.set_high();
            }
        }
    }
}

pub struct HeartbeatLed {
    led: Output<'static>,
}

impl HeartbeatLed {
    pub fn new(pin: AnyPin) -> Self {
        Self {
            led: Output::new(pin, Level::High, OutputDrive::Standard),
        }
    }

    /// Drive the LED directly (self-test only).
    pub fn set_on(&mut self, on: bool) {
        if on {
            self.led.set_low();
        } else {
            self.led.set_high();
        }
    }
}

impl HeartbeatPin for HeartbeatLed {
    fn toggle_heartbeat(&mut self) {
        self.led.toggle();
    }
}
