//! Debounced button menu firmware for the nRF52840.
//!
//! Two execution contexts:
//!
//! - **tick task** (interrupt executor, `EGU1_SWI1` at priority 6):
//!   every 10 ms samples the four buttons, debounces them,
//!   latches clean presses and toggles the heartbeat LED once a second.
//! - **main task** (thread executor): parks until the tick task signals, drains the latch
//!   and runs one menu cycle (transition, action, redraw).
//!
//! The event latch is the only state both contexts touch.

#![no_std]
#![no_main]

mod config;
mod error;
mod ui;

use core::convert::Infallible;

use crate::error::Error;
use crate::ui::buttons::{tick_task, ButtonBank};
use crate::ui::display::CharScreen;
use crate::ui::hal::StatusPort;
use crate::ui::leds::{HeartbeatLed, StatusLeds};
use crate::ui::menu::{MenuConfig, MenuMachine};
use crate::ui::EventLatch;
use defmt::{debug, error, info, warn};
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_nrf::gpio::Pin;
use embassy_nrf::interrupt::{self, InterruptExt, Priority};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

/// Runs the tick task above the thread-mode main task.
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn EGU1_SWI1() {
    EXECUTOR_HIGH.on_interrupt()
}

/// Pending button presses, written by the tick task.
static LATCH: EventLatch = EventLatch::new();

/// Raised by the tick task whenever the latch is non-empty.
static EVENT_READY: Signal<CriticalSectionRawMutex, ()> = Signal::new();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    match run().await {
        Ok(never) => match never {},
        Err(e) => error!("Startup failed: {}", e),
    }
    core::future::pending::<()>().await;
}

async fn run() -> Result<Infallible, Error> {
    let p = embassy_nrf::init(Default::default());
    info!("button-menu starting");

    let mut status = StatusLeds::new(p.P0_13.degrade(), p.P0_14.degrade(), p.P0_15.degrade());
    let mut heartbeat = HeartbeatLed::new(p.P0_16.degrade());

    // LED self-test.
    status.write_output(config::SELF_TEST_PATTERN);
    heartbeat.set_on(true);
    Timer::after_millis(config::SELF_TEST_MS).await;
    status.write_output(0);
    heartbeat.set_on(false);

    let buttons = ButtonBank::new(
        p.P0_11.degrade(),
        p.P0_12.degrade(),
        p.P0_24.degrade(),
        p.P0_25.degrade(),
    );
    interrupt::EGU1_SWI1.set_priority(Priority::P6);
    let high = EXECUTOR_HIGH.start(interrupt::EGU1_SWI1);
    high.spawn(tick_task(buttons, heartbeat, &LATCH, &EVENT_READY))?;

    let mut i2c_config = twim::Config::default();
    i2c_config.frequency = twim::Frequency::K400;
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, i2c_config);
    let mut screen = CharScreen::new(i2c)?;
    MenuMachine::splash(&mut screen);
    screen.flush()?;
    Timer::after_millis(config::SPLASH_MS).await;

    let mut menu = MenuMachine::new(MenuConfig::default());
    menu.show(&mut screen, &mut status);
    if let Err(e) = screen.flush() {
        warn!("Display flush failed: {}", e);
    }
    info!("Menu ready");

    loop {
        EVENT_READY.wait().await;
        if menu.service(&LATCH, &mut screen, &mut status) {
            debug!("Menu state: {}", menu.state());
            if let Err(e) = screen.flush() {
                warn!("Display flush failed: {}", e);
            }
        }
    }
}
