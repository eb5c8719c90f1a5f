//! GPIO button sampling driven by a 10 ms Embassy ticker.
//!
//! Four buttons, active-low with internal pull-up:
//!   - MENU  - advance to the next screen
//!   - ENTER - commit the edited value
//!   - UP    - increment the edited value
//!   - DOWN  - decrement the edited value
//!
//! The task owns the debouncer and the heartbeat LED.  Its only link to
//! the main task is the event latch plus a wake-up signal.

use crate::ui::hal::{ButtonPins, PeriodicTimer};
use crate::ui::latch::{ButtonEvent, EventLatch};
use crate::ui::leds::HeartbeatLed;
use crate::ui::tick::{is_overrun, TickSource};
use defmt::{debug, info, warn};
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant, Ticker};

/// The four button inputs, indexed by [`ButtonEvent::index`].
pub struct ButtonBank {
    inputs: [Input<'static>; 4],
}

impl ButtonBank {
    pub fn new(menu: AnyPin, enter: AnyPin, up: AnyPin, down: AnyPin) -> Self {
        Self {
            inputs: [
                Input::new(menu, Pull::Up),
                Input::new(enter, Pull::Up),
                Input::new(up, Pull::Up),
                Input::new(down, Pull::Up),
            ],
        }
    }
}

impl ButtonPins for ButtonBank {
    fn read_pin(&mut self, button: ButtonEvent) -> bool {
        // Active-low.
        self.inputs[button.index()].is_low()
    }
}

/// Embassy ticker behind the [`PeriodicTimer`] capability.
///
/// A late wake-up resynchronises the ticker instead of letting it replay
/// the missed periods back to back: a burst of catch-up ticks would hand
/// the debouncer several stale samples in a row.
pub struct TickTimer {
    ticker: Option<Ticker>,
    period_ms: u32,
    last: Option<Instant>,
}

impl TickTimer {
    pub const fn new() -> Self {
        Self {
            ticker: None,
            period_ms: 0,
            last: None,
        }
    }

    /// Wait for the next period.  Returns immediately if never armed.
    pub async fn wait(&mut self) {
        let Some(ticker) = self.ticker.as_mut() else {
            return;
        };
        ticker.next().await;

        let now = Instant::now();
        if let Some(last) = self.last {
            let elapsed = now.saturating_duration_since(last).as_micros();
            if is_overrun(elapsed, self.period_ms) {
                warn!("Tick overrun: {} us since last tick", elapsed);
                ticker.reset();
            }
        }
        self.last = Some(now);
    }
}

impl PeriodicTimer for TickTimer {
    fn arm_timer(&mut self, period_ms: u32) {
        self.ticker = Some(Ticker::every(Duration::from_millis(period_ms as u64)));
        self.period_ms = period_ms;
        self.last = None;
    }
}

/// Sample the buttons forever.
///
/// Spawned on the high-priority interrupt executor so a blocking display
/// flush in the main task cannot delay it.
///
/// Sets latch bits on clean presses and raises `ready` so the main task
/// wakes up instead of spinning on the latch.
#[embassy_executor::task]
pub async fn tick_task(
    mut buttons: ButtonBank,
    mut heartbeat: HeartbeatLed,
    latch: &'static EventLatch,
    ready: &'static Signal<CriticalSectionRawMutex, ()>,
) -> ! {
    let mut source = TickSource::default();
    let mut timer = TickTimer::new();
    source.arm(&mut timer);
    info!("Tick task running");

    loop {
        timer.wait().await;
        source.on_tick(&mut buttons, &mut heartbeat, latch);
        if latch.has_any() {
            debug!("Button event pending");
            ready.signal(());
        }
    }
}
