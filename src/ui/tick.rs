//! Periodic tick work: one debounce pass plus the heartbeat divider.
//!
//! Runs in the tick context.  Bounded work, no blocking, no allocation.

use crate::config::{DEBOUNCE_THRESHOLD, HEARTBEAT_TICKS, TICK_PERIOD_MS};
use crate::ui::debounce::Debouncer;
use crate::ui::hal::{ButtonPins, HeartbeatPin, PeriodicTimer};
use crate::ui::latch::EventLatch;

/// True when `elapsed_us` between two tick wake-ups spans two or more
/// periods, i.e. at least one tick was missed and a periodic timer would
/// fire the backlog back to back.
pub const fn is_overrun(elapsed_us: u64, period_ms: u32) -> bool {
    elapsed_us >= 2 * period_ms as u64 * 1_000
}

pub struct TickSource {
    debouncer: Debouncer,
    heartbeat_ticks: u16,
    heartbeat_count: u16,
}

impl TickSource {
    pub const fn new(debounce_threshold: u8, heartbeat_ticks: u16) -> Self {
        Self {
            debouncer: Debouncer::new(debounce_threshold),
            heartbeat_ticks: if heartbeat_ticks == 0 {
                1
            } else {
                heartbeat_ticks
            },
            heartbeat_count: 0,
        }
    }

    /// Arm `timer` for continuous firing at the configured period.
    pub fn arm<T: PeriodicTimer>(&self, timer: &mut T) {
        timer.arm_timer(TICK_PERIOD_MS);
    }

    /// Body of one tick.
    pub fn on_tick<P, H>(&mut self, pins: &mut P, heartbeat: &mut H, latch: &EventLatch)
    where
        P: ButtonPins,
        H: HeartbeatPin,
    {
        self.debouncer.sample_tick(pins, latch);

        self.heartbeat_count += 1;
        if self.heartbeat_count >= self.heartbeat_ticks {
            self.heartbeat_count = 0;
            heartbeat.toggle_heartbeat();
        }
    }

    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }
}

impl Default for TickSource {
    fn default() -> Self {
        Self::new(DEBOUNCE_THRESHOLD, HEARTBEAT_TICKS)
    }
}
