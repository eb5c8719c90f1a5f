//! Event latch shared between the tick context and the main loop.
//!
//! One bit per logical button.  The tick context only ever sets bits
//! (`fetch_or`), the main loop only ever clears them, all at once, with
//! `swap(0)`.  Both are single atomic read-modify-writes, so a press
//! committed while the main loop drains lands either in that batch or in
//! the next one, never half in each and never lost.
//!
//! Presses of the same button inside one undrained window coalesce into a
//! single pending bit.

use core::sync::atomic::{AtomicU8, Ordering};

/// Logical button / menu action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Menu,
    Enter,
    Up,
    Down,
}

impl ButtonEvent {
    /// All events, in channel order.
    pub const ALL: [ButtonEvent; 4] = [
        ButtonEvent::Menu,
        ButtonEvent::Enter,
        ButtonEvent::Up,
        ButtonEvent::Down,
    ];

    /// Channel index (and latch bit position).
    pub const fn index(self) -> usize {
        match self {
            ButtonEvent::Menu => 0,
            ButtonEvent::Enter => 1,
            ButtonEvent::Up => 2,
            ButtonEvent::Down => 3,
        }
    }

    const fn bit(self) -> u8 {
        1 << self.index()
    }
}

/// Snapshot of pending events taken by [`EventLatch::drain_all`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EventSet(u8);

impl EventSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn from_events(events: &[ButtonEvent]) -> Self {
        events.iter().fold(Self::empty(), |set, &ev| set.with(ev))
    }

    /// Copy of `self` with `event` added.
    pub const fn with(self, event: ButtonEvent) -> Self {
        Self(self.0 | event.bit())
    }

    pub const fn contains(self, event: ButtonEvent) -> bool {
        self.0 & event.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Pending events in channel order.
    pub fn iter(self) -> impl Iterator<Item = ButtonEvent> {
        ButtonEvent::ALL
            .into_iter()
            .filter(move |ev| self.contains(*ev))
    }
}

/// Lock-free pending-event flags.
///
/// Intended to live in a `static` so both contexts can reach it.
pub struct EventLatch {
    bits: AtomicU8,
}

impl EventLatch {
    pub const fn new() -> Self {
        Self {
            bits: AtomicU8::new(0),
        }
    }

    /// Mark `event` pending.  Tick context only.
    pub fn set(&self, event: ButtonEvent) {
        self.bits.fetch_or(event.bit(), Ordering::AcqRel);
    }

    /// Whether anything is waiting to be drained.
    pub fn has_any(&self) -> bool {
        self.bits.load(Ordering::Acquire) != 0
    }

    /// Take every pending event and clear the latch in one step.
    pub fn drain_all(&self) -> EventSet {
        EventSet(self.bits.swap(0, Ordering::AcqRel))
    }

    /// Busy-poll until an event is pending, then drain.
    ///
    /// Bare-metal fallback for targets without an executor; the firmware
    /// itself parks on a signal instead.
    pub fn spin_wait(&self) -> EventSet {
        loop {
            if self.has_any() {
                let batch = self.drain_all();
                if !batch.is_empty() {
                    return batch;
                }
            }
            core::hint::spin_loop();
        }
    }
}

impl Default for EventLatch {
    fn default() -> Self {
        Self::new()
    }
}
