//! wifi-scanner firmware - ESP32 + SSD1306 over I²C.
//!
//! Three Embassy tasks:
//!
//! - **scan**: waits for the scan permit, scans, releases data-ready
//! - **cycle**: ticks the display cycle every `CYCLE_INTERVAL_MS`
//! - **render**: animates queued screen transitions on the OLED

#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]

use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Ticker, Timer};
use esp_hal::clock::CpuClock;
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::peripherals::Peripherals;
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;
use esp_hal::Blocking;
use esp_radio::wifi::WifiController;
use panic_rtt_target as _;
use static_cell::StaticCell;

use wifi_scanner::config::{CYCLE_INTERVAL_MS, DISPLAY_I2C_KHZ, SCAN_LIST_SIZE};
use wifi_scanner::scan::radio::RadioScanner;
use wifi_scanner::ui::display::{self, Display};
use wifi_scanner::ui::render::{self, ChannelRenderer, TransitionChannel};
use wifi_scanner::{
    CycleState, DisplayCycler, Error, Handshake, ResultBuffer, ScanCoordinator, ScreenPool,
    SharedScreenPool,
};

esp_bootloader_esp_idf::esp_app_desc!();

type Scan = Handshake<'static, SCAN_LIST_SIZE>;
type Oled = Display<I2c<'static, Blocking>>;

// ═══════════════════════════════════════════════════════════════════════════
// Shared state
// ═══════════════════════════════════════════════════════════════════════════

static RADIO_INIT: StaticCell<esp_radio::Controller<'static>> = StaticCell::new();
static WIFI_CONTROLLER: StaticCell<WifiController<'static>> = StaticCell::new();

static RESULTS: StaticCell<ResultBuffer<SCAN_LIST_SIZE>> = StaticCell::new();
static HANDSHAKE: StaticCell<Scan> = StaticCell::new();

static SCREEN_POOL: SharedScreenPool = Mutex::new(ScreenPool::new());
static TRANSITIONS: TransitionChannel = Channel::new();

// ═══════════════════════════════════════════════════════════════════════════
// Entry point
// ═══════════════════════════════════════════════════════════════════════════

#[allow(
    clippy::large_stack_frames,
    reason = "it's not unusual to allocate larger buffers etc. in main"
)]
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    rtt_target::rtt_init_defmt!();

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    esp_alloc::heap_allocator!(#[esp_hal::ram(reclaimed)] size: 98768);
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    info!("wifi-scanner starting");

    if let Err(e) = start(spawner, peripherals).await {
        panic!("startup failed: {:?}", e);
    }

    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}

/// Bring up radio and display, then spawn the three tasks.
async fn start(spawner: Spawner, peripherals: Peripherals) -> Result<(), Error> {
    let radio_init = esp_radio::init().map_err(|_| {
        error!("Failed to initialize radio controller");
        Error::RadioInit
    })?;
    let radio_init = RADIO_INIT.init(radio_init);

    let (controller, _interfaces) =
        esp_radio::wifi::new(radio_init, peripherals.WIFI, Default::default()).map_err(|_| {
            error!("Failed to create WiFi controller");
            Error::RadioInit
        })?;
    let controller = WIFI_CONTROLLER.init(controller);
    let radio = RadioScanner::start(controller).await?;

    let i2c = I2c::new(
        peripherals.I2C0,
        I2cConfig::default().with_frequency(Rate::from_khz(DISPLAY_I2C_KHZ)),
    )
    .map_err(|_| Error::Display)?
    .with_sda(peripherals.GPIO21)
    .with_scl(peripherals.GPIO22);
    let oled = display::init(i2c)?;
    info!("Display initialized");

    let results = RESULTS.init(ResultBuffer::new());
    let handshake: &'static Scan = HANDSHAKE.init(Handshake::new(results));

    spawner.spawn(render_task(oled)).map_err(|_| Error::TaskSpawn)?;
    spawner
        .spawn(cycle_task(handshake))
        .map_err(|_| Error::TaskSpawn)?;
    spawner
        .spawn(scan_task(handshake, radio))
        .map_err(|_| Error::TaskSpawn)?;

    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// Tasks
// ═══════════════════════════════════════════════════════════════════════════

#[embassy_executor::task]
async fn scan_task(handshake: &'static Scan, radio: RadioScanner) {
    let mut coordinator = ScanCoordinator::new(handshake, radio);
    let e = coordinator.run().await;
    panic!("scan loop stopped: {:?}", e);
}

#[embassy_executor::task]
async fn cycle_task(handshake: &'static Scan) {
    let mut cycler = DisplayCycler::new(handshake, &SCREEN_POOL, ChannelRenderer::new(&TRANSITIONS));
    let mut ticker = Ticker::every(Duration::from_millis(CYCLE_INTERVAL_MS));

    loop {
        ticker.next().await;
        let from_idle = cycler.state() == CycleState::AtIdle;
        let state = cycler.tick().await;
        if from_idle {
            // The idle tick may have waited a whole scan for data; don't
            // burst through the missed intervals.
            ticker.reset();
        }
        info!("Display cycle: {}", state);
    }
}

#[embassy_executor::task]
async fn render_task(mut oled: Oled) {
    render::run(&mut oled, &TRANSITIONS, &SCREEN_POOL).await
}
