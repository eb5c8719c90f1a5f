//! Menu state machine and value editor.
//!
//! Four screens visited in a fixed cycle with MENU.  Each screen shows one
//! committed value and the shared scratch value being edited:
//!
//! ```text
//! Row 0: "A Value> "  <committed>
//! Row 1: "New A?> "   <scratch>
//! ```
//!
//! Every drained batch is handled in two passes over the *same* set of
//! events: transition logic first (MENU, with the OnEntry action of the
//! screen entered), then action logic for whatever screen is now active
//! (ENTER commits, UP increments, DOWN decrements with a floor at zero).

use crate::config::{
    INITIAL_VALUES, PROBLEM_TEXT, SPLASH_TEXT, UNKNOWN_STATE_PATTERN, VALUE_CEILING, VALUE_COLUMN,
};
use crate::ui::hal::{CharDisplay, StatusPort};
use crate::ui::latch::{ButtonEvent, EventLatch, EventSet};

/// Number of valid menu states.
pub const STATE_COUNT: usize = 4;

/// Title and prompt drawn on entry to each screen.
const SCREEN_TEXT: [(&str, &str); STATE_COUNT] = [
    ("A Value> ", "New A?> "),
    ("B Value> ", "New B?> "),
    ("C Value> ", "New C?> "),
    ("D Value> ", "New D?> "),
];

/// Active menu screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuState {
    EditA,
    EditB,
    EditC,
    EditD,
    /// Raw state index outside the known set.
    Unknown(u8),
}

impl MenuState {
    pub const FIRST: MenuState = MenuState::EditA;

    pub const fn from_index(index: u8) -> Self {
        match index {
            0 => MenuState::EditA,
            1 => MenuState::EditB,
            2 => MenuState::EditC,
            3 => MenuState::EditD,
            other => MenuState::Unknown(other),
        }
    }

    /// Position in the cycle, `None` for [`MenuState::Unknown`].
    pub const fn index(self) -> Option<usize> {
        match self {
            MenuState::EditA => Some(0),
            MenuState::EditB => Some(1),
            MenuState::EditC => Some(2),
            MenuState::EditD => Some(3),
            MenuState::Unknown(_) => None,
        }
    }

    /// Successor in the cycle.  Unknown recovers to the first screen.
    pub const fn next(self) -> Self {
        match self {
            MenuState::EditA => MenuState::EditB,
            MenuState::EditB => MenuState::EditC,
            MenuState::EditC => MenuState::EditD,
            MenuState::EditD => MenuState::EditA,
            MenuState::Unknown(_) => MenuState::FIRST,
        }
    }

    /// Status-port pattern identifying this state.
    pub const fn indicator(self) -> u8 {
        match self.index() {
            Some(i) => i as u8 + 1,
            None => UNKNOWN_STATE_PATTERN,
        }
    }
}

/// What happens to the scratch value when a screen is entered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EntryReset {
    /// Start every edit from zero.
    #[default]
    Zero,
    /// Start from the entered screen's committed value.
    Committed,
    /// Carry the scratch value over unchanged.
    Keep,
}

/// Bounds applied to the scratch value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ValueLimits {
    /// Highest value UP may reach.  `None` lets the byte wrap past 255.
    /// A value already above the ceiling is left where it is.
    pub ceiling: Option<u8>,
}

impl ValueLimits {
    pub fn increment(&self, value: u8) -> u8 {
        match self.ceiling {
            Some(ceiling) if value >= ceiling => value,
            _ => value.wrapping_add(1),
        }
    }

    pub fn decrement(&self, value: u8) -> u8 {
        value.saturating_sub(1)
    }
}

impl Default for ValueLimits {
    fn default() -> Self {
        Self {
            ceiling: VALUE_CEILING,
        }
    }
}

/// Runtime knobs for [`MenuMachine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuConfig {
    pub entry_reset: EntryReset,
    pub limits: ValueLimits,
    pub initial_values: [u8; STATE_COUNT],
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            entry_reset: EntryReset::default(),
            limits: ValueLimits::default(),
            initial_values: INITIAL_VALUES,
        }
    }
}

pub struct MenuMachine {
    state: MenuState,
    committed: [u8; STATE_COUNT],
    scratch: u8,
    config: MenuConfig,
}

impl MenuMachine {
    pub fn new(config: MenuConfig) -> Self {
        Self::with_state(config, MenuState::FIRST)
    }

    pub fn with_state(config: MenuConfig, state: MenuState) -> Self {
        Self {
            state,
            committed: config.initial_values,
            scratch: 0,
            config,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Committed value behind `state`, if it has one.
    pub fn committed(&self, state: MenuState) -> Option<u8> {
        state.index().map(|i| self.committed[i])
    }

    /// Scratch value being edited.
    pub fn scratch(&self) -> u8 {
        self.scratch
    }

    /// Draw the power-up splash.
    pub fn splash<D: CharDisplay>(display: &mut D) {
        display.clear();
        display.set_cursor(0, 0);
        display.print_text(SPLASH_TEXT);
    }

    /// Draw the active screen from scratch (title plus values).
    pub fn show<D: CharDisplay, S: StatusPort>(&mut self, display: &mut D, status: &mut S) {
        self.draw_window(display);
        self.render(display, status);
    }

    /// Drain `latch` and handle the batch.  Returns `false` if it was empty.
    pub fn service<D: CharDisplay, S: StatusPort>(
        &mut self,
        latch: &EventLatch,
        display: &mut D,
        status: &mut S,
    ) -> bool {
        let batch = latch.drain_all();
        if batch.is_empty() {
            return false;
        }
        self.handle(batch, display, status);
        true
    }

    /// One cycle: transition logic, action logic, then render.
    pub fn handle<D: CharDisplay, S: StatusPort>(
        &mut self,
        batch: EventSet,
        display: &mut D,
        status: &mut S,
    ) {
        if batch.contains(ButtonEvent::Menu) {
            #[cfg(feature = "defmt")]
            defmt::debug!("menu: {} -> {}", self.state, self.state.next());
            self.state = self.state.next();
            self.on_entry(display);
        }

        if let Some(slot) = self.state.index() {
            if batch.contains(ButtonEvent::Enter) {
                self.committed[slot] = self.scratch;
            }
            if batch.contains(ButtonEvent::Up) {
                self.scratch = self.config.limits.increment(self.scratch);
            }
            if batch.contains(ButtonEvent::Down) {
                self.scratch = self.config.limits.decrement(self.scratch);
            }
        }

        self.render(display, status);
    }

    fn on_entry<D: CharDisplay>(&mut self, display: &mut D) {
        self.scratch = match self.config.entry_reset {
            EntryReset::Zero => 0,
            EntryReset::Committed => self.committed(self.state).unwrap_or(0),
            EntryReset::Keep => self.scratch,
        };
        self.draw_window(display);
    }

    fn draw_window<D: CharDisplay>(&self, display: &mut D) {
        let Some(slot) = self.state.index() else {
            return;
        };
        let (title, prompt) = SCREEN_TEXT[slot];
        display.clear();
        display.set_cursor(0, 0);
        display.print_text(title);
        display.set_cursor(0, 1);
        display.print_text(prompt);
    }

    fn render<D: CharDisplay, S: StatusPort>(&self, display: &mut D, status: &mut S) {
        match self.state.index() {
            Some(slot) => {
                display.set_cursor(VALUE_COLUMN, 0);
                display.print_number(self.committed[slot]);
                display.set_cursor(VALUE_COLUMN, 1);
                display.print_number(self.scratch);
            }
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("menu: unknown state {}", self.state);
                display.clear();
                display.set_cursor(0, 0);
                display.print_text(PROBLEM_TEXT);
            }
        }
        status.write_output(self.state.indicator());
    }
}

impl Default for MenuMachine {
    fn default() -> Self {
        Self::new(MenuConfig::default())
    }
}
