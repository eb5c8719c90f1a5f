//! SSD1306 OLED used as a 16×2 character display.
//!
//! The menu writes into a cell buffer through [`CharDisplay`]; `flush()`
//! pushes the whole buffer to the panel once per handled batch.

use core::fmt::Write;

use crate::config::{DISPLAY_COLS, DISPLAY_ROWS};
use crate::error::Error;
use crate::ui::hal::CharDisplay;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Baseline of the first text row and spacing between rows (pixels).
const FIRST_BASELINE: i32 = 10;
const ROW_PITCH: i32 = 16;

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

pub struct CharScreen<I2C> {
    display: Display<I2C>,
    cells: [[u8; DISPLAY_COLS]; DISPLAY_ROWS],
    col: usize,
    row: usize,
}

impl<I2C> CharScreen<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Initialise the panel and blank it.
    pub fn new(i2c: I2C) -> Result<Self, Error> {
        let interface = I2CDisplayInterface::new(i2c);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        display.init().map_err(|_| Error::Display)?;
        display.clear_buffer();
        display.flush().map_err(|_| Error::Display)?;

        Ok(Self {
            display,
            cells: [[b' '; DISPLAY_COLS]; DISPLAY_ROWS],
            col: 0,
            row: 0,
        })
    }

    /// Redraw the panel from the cell buffer.
    pub fn flush(&mut self) -> Result<(), Error> {
        self.display.clear_buffer();
        for (row, cells) in self.cells.iter().enumerate() {
            // Only ASCII is ever written into the buffer.
            let line = core::str::from_utf8(cells).unwrap_or("");
            let y = FIRST_BASELINE + row as i32 * ROW_PITCH;
            Text::new(line, Point::new(0, y), text_style())
                .draw(&mut self.display)
                .map_err(|_| Error::Display)?;
        }
        self.display.flush().map_err(|_| Error::Display)
    }

    fn put(&mut self, byte: u8) {
        if self.row < DISPLAY_ROWS && self.col < DISPLAY_COLS {
            self.cells[self.row][self.col] = if byte.is_ascii() { byte } else { b'?' };
        }
        self.col += 1;
    }
}

impl<I2C> CharDisplay for CharScreen<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn clear(&mut self) {
        self.cells = [[b' '; DISPLAY_COLS]; DISPLAY_ROWS];
        self.col = 0;
        self.row = 0;
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        self.col = col as usize;
        self.row = row as usize;
    }

    fn print_text(&mut self, text: &str) {
        for byte in text.bytes() {
            self.put(byte);
        }
    }

    fn print_number(&mut self, value: u8) {
        // Fixed width so a shorter number overwrites a longer one.
        let mut digits: heapless::String<3> = heapless::String::new();
        let _ = write!(digits, "{:<3}", value);
        for byte in digits.bytes() {
            self.put(byte);
        }
    }
}
