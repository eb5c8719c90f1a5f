//! Counter-based button debouncer.
//!
//! Each channel remembers the last raw sample and how many identical
//! samples have been seen in a row.  A level is committed once the run
//! reaches the threshold; only released→pressed commits produce an event.

use crate::config::DEBOUNCE_THRESHOLD;
use crate::ui::hal::ButtonPins;
use crate::ui::latch::{ButtonEvent, EventLatch};

/// Committed level change reported by [`ButtonChannel::sample`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Pressed,
    Released,
}

/// Debounce state for one physical button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonChannel {
    raw: bool,
    stable: bool,
    consecutive_count: u8,
    debounce_threshold: u8,
}

impl ButtonChannel {
    /// New channel at the released level.
    ///
    /// A threshold of 0 is treated as 1.
    pub const fn new(debounce_threshold: u8) -> Self {
        Self {
            raw: false,
            stable: false,
            consecutive_count: 0,
            debounce_threshold: if debounce_threshold == 0 {
                1
            } else {
                debounce_threshold
            },
        }
    }

    /// Feed one raw sample.
    pub fn sample(&mut self, level: bool) -> Option<Edge> {
        if level == self.raw {
            if self.consecutive_count < self.debounce_threshold {
                self.consecutive_count += 1;
            }
        } else {
            self.raw = level;
            self.consecutive_count = 1;
        }

        if self.consecutive_count >= self.debounce_threshold && self.raw != self.stable {
            self.stable = self.raw;
            return Some(if self.stable {
                Edge::Pressed
            } else {
                Edge::Released
            });
        }

        None
    }

    /// Debounced level.
    pub fn stable(&self) -> bool {
        self.stable
    }

    /// Latest raw sample.
    pub fn raw(&self) -> bool {
        self.raw
    }

    pub fn consecutive_count(&self) -> u8 {
        self.consecutive_count
    }
}

impl Default for ButtonChannel {
    fn default() -> Self {
        Self::new(DEBOUNCE_THRESHOLD)
    }
}

/// Debounce filter over all four buttons.
pub struct Debouncer {
    channels: [ButtonChannel; 4],
}

impl Debouncer {
    pub const fn new(debounce_threshold: u8) -> Self {
        Self {
            channels: [ButtonChannel::new(debounce_threshold); 4],
        }
    }

    /// One sampling pass: read every pin, update its channel, latch presses.
    pub fn sample_tick<P: ButtonPins>(&mut self, pins: &mut P, latch: &EventLatch) {
        for event in ButtonEvent::ALL {
            let level = pins.read_pin(event);
            if let Some(Edge::Pressed) = self.channels[event.index()].sample(level) {
                latch.set(event);
            }
        }
    }

    pub fn channel(&self, event: ButtonEvent) -> &ButtonChannel {
        &self.channels[event.index()]
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(ch: &mut ButtonChannel, samples: &[u8]) -> Vec<(usize, Edge)> {
        samples
            .iter()
            .enumerate()
            .filter_map(|(i, &s)| ch.sample(s != 0).map(|e| (i, e)))
            .collect()
    }

    #[test]
    fn bounce_then_settle_commits_on_fifth_consecutive_sample() {
        let mut ch = ButtonChannel::new(5);
        let edges = feed(&mut ch, &[1, 0, 1, 1, 1, 1, 1]);
        // Index 6 is the fifth `1` after the last bounce.
        assert_eq!(edges, vec![(6, Edge::Pressed)]);
        assert!(ch.stable());
    }

    #[test]
    fn short_bounces_never_commit() {
        let mut ch = ButtonChannel::new(5);
        let edges = feed(&mut ch, &[1, 1, 0, 1, 1, 1, 1, 0, 1, 0, 0, 1, 1]);
        assert!(edges.is_empty());
        assert!(!ch.stable());
    }

    #[test]
    fn long_run_commits_exactly_once() {
        let mut ch = ButtonChannel::new(3);
        let edges = feed(&mut ch, &[1; 20]);
        assert_eq!(edges, vec![(2, Edge::Pressed)]);
        assert_eq!(ch.consecutive_count(), 3);
    }

    #[test]
    fn release_is_reported_as_its_own_edge() {
        let mut ch = ButtonChannel::new(2);
        let edges = feed(&mut ch, &[1, 1, 0, 1, 0, 0, 0]);
        assert_eq!(edges, vec![(1, Edge::Pressed), (5, Edge::Released)]);
        assert!(!ch.stable());
    }

    #[test]
    fn idle_run_at_released_level_is_silent() {
        let mut ch = ButtonChannel::new(4);
        assert!(feed(&mut ch, &[0; 10]).is_empty());
        assert!(!ch.raw());
    }

    #[test]
    fn zero_threshold_behaves_as_one() {
        let mut ch = ButtonChannel::new(0);
        assert_eq!(ch.sample(true), Some(Edge::Pressed));
        assert_eq!(ch.sample(false), Some(Edge::Released));
    }

    struct Levels([bool; 4]);

    impl ButtonPins for Levels {
        fn read_pin(&mut self, button: ButtonEvent) -> bool {
            self.0[button.index()]
        }
    }

    #[test]
    fn sample_tick_latches_press_only() {
        let latch = EventLatch::new();
        let mut debouncer = Debouncer::new(2);
        let mut pins = Levels([false, false, true, false]);

        debouncer.sample_tick(&mut pins, &latch);
        assert!(!latch.has_any());
        debouncer.sample_tick(&mut pins, &latch);
        assert!(latch.drain_all().contains(ButtonEvent::Up));
        assert!(debouncer.channel(ButtonEvent::Up).stable());

        // Release never latches.
        pins.0[ButtonEvent::Up.index()] = false;
        for _ in 0..4 {
            debouncer.sample_tick(&mut pins, &latch);
        }
        assert!(!latch.has_any());
        assert!(!debouncer.channel(ButtonEvent::Up).stable());
    }
}
