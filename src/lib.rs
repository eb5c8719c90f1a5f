//! Test-only library interface for button-menu.
//!
//! This module re-exports the pure logic modules (debouncer, event latch,
//! tick source, menu state machine) so they can be tested on the host
//! with simulated pins and displays.
//!
//! Usage: `cargo test --lib` or `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! This lib.rs provides a separate entry point for host-based testing.

#![cfg_attr(not(test), no_std)]

pub mod config;

// Internal module paths for the actual implementations
#[path = "ui/debounce.rs"]
mod ui_debounce_impl;
#[path = "ui/hal.rs"]
mod ui_hal_impl;
#[path = "ui/latch.rs"]
mod ui_latch_impl;
#[path = "ui/menu.rs"]
mod ui_menu_impl;
#[path = "ui/tick.rs"]
mod ui_tick_impl;

pub mod ui {
    pub mod debounce {
        pub use crate::ui_debounce_impl::*;
    }
    pub mod hal {
        pub use crate::ui_hal_impl::*;
    }
    pub mod latch {
        pub use crate::ui_latch_impl::*;
    }
    pub mod menu {
        pub use crate::ui_menu_impl::*;
    }
    pub mod tick {
        pub use crate::ui_tick_impl::*;
    }

    pub use latch::{ButtonEvent, EventLatch, EventSet};
}

// ═══════════════════════════════════════════════════════════════════════════
// Pipeline Tests - tick source → latch → menu
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::config::{DEBOUNCE_THRESHOLD, INITIAL_VALUES, SPLASH_TEXT, VALUE_COLUMN};
    use super::ui::hal::{ButtonPins, CharDisplay, HeartbeatPin, StatusPort};
    use super::ui::menu::{MenuMachine, MenuState};
    use super::ui::tick::TickSource;
    use super::ui::{ButtonEvent, EventLatch};

    /// Pins whose levels the test sets directly.
    #[derive(Default)]
    struct Board {
        levels: [bool; 4],
        heartbeats: u32,
        pattern: Option<u8>,
    }

    impl ButtonPins for Board {
        fn read_pin(&mut self, button: ButtonEvent) -> bool {
            self.levels[button.index()]
        }
    }

    impl HeartbeatPin for Board {
        fn toggle_heartbeat(&mut self) {
            self.heartbeats += 1;
        }
    }

    impl StatusPort for Board {
        fn write_output(&mut self, pattern: u8) {
            self.pattern = Some(pattern);
        }
    }

    /// 16×2 character grid, like the real panel.
    struct Grid {
        cells: [[u8; 16]; 2],
        col: usize,
        row: usize,
    }

    impl Grid {
        fn new() -> Self {
            Self {
                cells: [[b' '; 16]; 2],
                col: 0,
                row: 0,
            }
        }

        fn line(&self, row: usize) -> String {
            String::from_utf8(self.cells[row].to_vec())
                .unwrap()
                .trim_end()
                .to_string()
        }

        fn put(&mut self, byte: u8) {
            if self.col < 16 && self.row < 2 {
                self.cells[self.row][self.col] = byte;
            }
            self.col += 1;
        }
    }

    impl CharDisplay for Grid {
        fn clear(&mut self) {
            *self = Grid::new();
        }
        fn set_cursor(&mut self, col: u8, row: u8) {
            self.col = col as usize;
            self.row = row as usize;
        }
        fn print_text(&mut self, text: &str) {
            text.bytes().for_each(|b| self.put(b));
        }
        fn print_number(&mut self, value: u8) {
            format!("{:<3}", value).bytes().for_each(|b| self.put(b));
        }
    }

    struct Rig {
        source: TickSource,
        latch: EventLatch,
        board: Board,
        grid: Grid,
        menu: MenuMachine,
    }

    impl Rig {
        fn new() -> Self {
            let mut rig = Self {
                source: TickSource::default(),
                latch: EventLatch::new(),
                board: Board::default(),
                grid: Grid::new(),
                menu: MenuMachine::default(),
            };
            rig.menu.show(&mut rig.grid, &mut rig.board);
            rig
        }

        fn tick(&mut self) {
            self.source
                .on_tick(&mut self.board, &mut Blink, &self.latch);
        }

        /// Hold `button` long enough to commit, release it, then service.
        fn click(&mut self, button: ButtonEvent) {
            self.board.levels[button.index()] = true;
            for _ in 0..DEBOUNCE_THRESHOLD {
                self.tick();
            }
            self.board.levels[button.index()] = false;
            for _ in 0..DEBOUNCE_THRESHOLD {
                self.tick();
            }
            self.menu
                .service(&self.latch, &mut self.grid, &mut self.board);
        }
    }

    struct Blink;

    impl HeartbeatPin for Blink {
        fn toggle_heartbeat(&mut self) {}
    }

    #[test]
    fn first_screen_after_startup() {
        let rig = Rig::new();
        assert_eq!(rig.grid.line(0), format!("A Value>  {}", INITIAL_VALUES[0]));
        assert_eq!(rig.grid.line(1), "New A?>   0");
        assert_eq!(rig.board.pattern, Some(0x01));
    }

    #[test]
    fn splash_shows_ready_text() {
        let mut grid = Grid::new();
        MenuMachine::splash(&mut grid);
        assert_eq!(grid.line(0), SPLASH_TEXT);
    }

    #[test]
    fn clicks_edit_and_commit_value() {
        let mut rig = Rig::new();
        rig.click(ButtonEvent::Up);
        rig.click(ButtonEvent::Up);
        rig.click(ButtonEvent::Up);
        rig.click(ButtonEvent::Enter);

        assert_eq!(rig.menu.committed(MenuState::EditA), Some(3));
        assert_eq!(rig.grid.line(0), "A Value>  3");
        assert_eq!(rig.grid.line(1), "New A?>   3");
    }

    #[test]
    fn value_column_is_shared_by_both_rows() {
        let rig = Rig::new();
        let col = VALUE_COLUMN as usize;
        assert_ne!(rig.grid.cells[0][col], b' ');
        assert_ne!(rig.grid.cells[1][col], b' ');
    }

    #[test]
    fn menu_click_moves_to_next_screen() {
        let mut rig = Rig::new();
        rig.click(ButtonEvent::Menu);
        assert_eq!(rig.menu.state(), MenuState::EditB);
        assert_eq!(rig.grid.line(0), format!("B Value>  {}", INITIAL_VALUES[1]));
        assert_eq!(rig.board.pattern, Some(0x02));
    }

    #[test]
    fn shorter_number_overwrites_longer() {
        let mut rig = Rig::new();
        for _ in 0..10 {
            rig.click(ButtonEvent::Up);
        }
        rig.click(ButtonEvent::Down);
        assert_eq!(rig.grid.line(1), "New A?>   9");
    }

    #[test]
    fn held_button_fires_once() {
        let mut rig = Rig::new();
        rig.board.levels[ButtonEvent::Up.index()] = true;
        for _ in 0..50 {
            rig.tick();
            rig.menu
                .service(&rig.latch, &mut rig.grid, &mut rig.board);
        }
        assert_eq!(rig.menu.scratch(), 1);
    }

    #[test]
    fn presses_in_one_undrained_window_coalesce() {
        let mut rig = Rig::new();
        for _ in 0..3 {
            rig.board.levels[ButtonEvent::Up.index()] = true;
            for _ in 0..DEBOUNCE_THRESHOLD {
                rig.tick();
            }
            rig.board.levels[ButtonEvent::Up.index()] = false;
            for _ in 0..DEBOUNCE_THRESHOLD {
                rig.tick();
            }
        }
        rig.menu
            .service(&rig.latch, &mut rig.grid, &mut rig.board);
        assert_eq!(rig.menu.scratch(), 1);
    }

    #[test]
    fn bounce_sequence_commits_on_fifth_settled_sample() {
        let latch = EventLatch::new();
        let mut source = TickSource::new(5, 100);
        let mut board = Board::default();

        let samples = [1, 0, 1, 1, 1, 1, 1];
        for (i, &s) in samples.iter().enumerate() {
            board.levels[ButtonEvent::Menu.index()] = s != 0;
            source.on_tick(&mut board, &mut Blink, &latch);
            let stable = source.debouncer().channel(ButtonEvent::Menu).stable();
            assert_eq!(stable, i == samples.len() - 1, "sample {}", i);
        }

        let batch = latch.drain_all();
        assert_eq!(batch.len(), 1);
        assert!(batch.contains(ButtonEvent::Menu));
        assert!(latch.drain_all().is_empty());
    }

    #[test]
    fn heartbeat_runs_alongside_debounce() {
        let latch = EventLatch::new();
        let mut source = TickSource::default();
        let mut board = Board::default();
        for _ in 0..250 {
            let mut pins = Board::default();
            source.on_tick(&mut pins, &mut board, &latch);
        }
        assert_eq!(board.heartbeats, 2);
    }
}
