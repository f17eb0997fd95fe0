//! trellis-oled-demo
//!
//! Trellis keypad → OLED mirror firmware for the Raspberry Pi Pico 2. Wires
//! both driver crates onto one I2C bus:
//!
//! 1. A Trellis key is pressed.
//! 2. The Trellis pulls its INT pin low.
//! 3. The keypad task scans the keys, toggles the LED under every key that
//!    was just pressed, writes the LEDs back and publishes the new LED
//!    pattern.
//! 4. The OLED task wakes on the published pattern and draws a 4 × 4 grid
//!    of filled / hollow squares mirroring the keypad on a portrait
//!    (64 × 128, page-addressed) SH1107 FeatherWing.
//!
//! Each device is owned by exactly one task. The physical bus is shared
//! through blocking `I2cDevice` wrappers that serialise every transaction.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_embedded_hal::shared_bus::blocking::i2c::I2cDevice;
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;
use embassy_time::{Delay, Duration, Timer};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use sh1107_driver::Sh1107;
use trellis_driver::{Trellis, KEY_COUNT};

// ---------------------------------------------------------------------------
// Boot block
// ---------------------------------------------------------------------------

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = embassy_rp::block::ImageDef::secure_exe();

// ---------------------------------------------------------------------------
// Static storage
// ---------------------------------------------------------------------------

/// Shared I2C0 bus — the Trellis and the OLED access it through I2cDevice
/// wrappers that lock it for the duration of each transaction.
static I2C_BUS: StaticCell<
    Mutex<CriticalSectionRawMutex, RefCell<I2c<'static, I2C0, i2c::Blocking>>>,
> = StaticCell::new();

/// Latest LED pattern, bit `n` set when key `n`'s LED is lit.
static LED_PATTERN: Signal<CriticalSectionRawMutex, u16> = Signal::new();

// ---------------------------------------------------------------------------
// Type aliases
// ---------------------------------------------------------------------------

/// Concrete I2C type for both devices, sharing I2C_BUS.
type SharedI2c = I2cDevice<'static, CriticalSectionRawMutex, I2c<'static, I2C0, i2c::Blocking>>;

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

const OLED_ADDRESS: u8 = 0x3C;
const TRELLIS_ADDRESS: u8 = 0x70;

/// Portrait FeatherWing: 64 wide × 128 tall (page addressing).
const OLED_WIDTH: u16 = 64;
const OLED_HEIGHT: u16 = 128;

/// One grid cell per key: 16 × 16 px, drawn 12 × 12 with a 2 px margin.
const CELL: i32 = 16;
const CELL_FILL: u32 = 12;
const GRID_TOP: i32 = 32;

/// Debounce interval between the INT edge and the key scan.
const DEBOUNCE_MS: u64 = 20;

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Interrupt-driven keypad task.
///
/// Owns the Trellis. Waits for INT to go low, scans, toggles LEDs on fresh
/// presses, writes them back and publishes the pattern to the OLED task.
#[embassy_executor::task]
async fn trellis_task(mut int_pin: Input<'static>, mut trellis: Trellis<SharedI2c>) {
    info!("Trellis task started");

    // Prime the snapshots so stale power-on state does not show as presses.
    trellis.read_switches();

    loop {
        int_pin.wait_for_low().await;
        Timer::after(Duration::from_millis(DEBOUNCE_MS)).await;

        if !trellis.read_switches() {
            continue;
        }

        let mut pattern = 0u16;
        for key in 0..KEY_COUNT as u8 {
            if trellis.just_pressed(key) {
                debug!("Key {} pressed", key);
                if trellis.is_led(key) {
                    trellis.clear_led(key);
                } else {
                    trellis.set_led(key);
                }
            }
            if trellis.is_led(key) {
                pattern |= 1 << key;
            }
        }

        trellis.write_display();
        LED_PATTERN.signal(pattern);
    }
}

/// OLED mirror task.
///
/// Owns the display. Redraws the 4 × 4 grid whenever a new LED pattern is
/// published.
#[embassy_executor::task]
async fn oled_task(mut oled: Sh1107<SharedI2c>) {
    info!("OLED task started");

    let mut pattern = 0u16;
    loop {
        oled.clear_buffer();
        draw_grid(&mut oled, pattern);
        oled.display();

        pattern = LED_PATTERN.wait().await;
    }
}

/// Draw one cell per key: filled when its LED is lit, outlined otherwise.
fn draw_grid(oled: &mut Sh1107<SharedI2c>, pattern: u16) {
    for key in 0..KEY_COUNT {
        let col = (key % 4) as i32;
        let row = (key / 4) as i32;
        let origin = Point::new(col * CELL + 2, GRID_TOP + row * CELL + 2);
        let style = if pattern & (1 << key) != 0 {
            PrimitiveStyle::with_fill(BinaryColor::On)
        } else {
            PrimitiveStyle::with_stroke(BinaryColor::On, 1)
        };

        Rectangle::new(origin, Size::new(CELL_FILL, CELL_FILL))
            .into_styled(style)
            .draw(oled)
            .ok();
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("trellis-oled-demo starting");

    // —— Pin assignments ————————————————————————————————————————————————————
    // I2C_SDA     → GP20  (p.PIN_20)
    // I2C_SCL     → GP21  (p.PIN_21)
    // TRELLIS_INT → GP19  (p.PIN_19)  active-low, pull-up enabled
    // ———————————————————————————————————————————————————————————————————————

    let mut config = i2c::Config::default();
    config.frequency = 400_000;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_21, p.PIN_20, config);

    let i2c_bus = I2C_BUS.init(Mutex::new(RefCell::new(i2c)));

    // —— OLED initialisation ————————————————————————————————————————————————

    let mut oled = Sh1107::new(
        I2cDevice::new(i2c_bus),
        OLED_ADDRESS,
        OLED_WIDTH,
        OLED_HEIGHT,
        false,
    );
    if let Err(e) = oled.configure() {
        // Unsupported size: the display stays blank but the keypad still works.
        error!("OLED configure failed: {}", e);
    }
    oled.clear_display();

    // —— Trellis initialisation —————————————————————————————————————————————

    let mut trellis = Trellis::new(I2cDevice::new(i2c_bus), TRELLIS_ADDRESS, 8);
    trellis.configure(&mut Delay);
    trellis.clear();
    trellis.write_display();

    let int_pin = Input::new(p.PIN_19, Pull::Up);

    // —— Spawn tasks ————————————————————————————————————————————————————————

    spawner.spawn(oled_task(oled)).unwrap();
    spawner.spawn(trellis_task(int_pin, trellis)).unwrap();

    info!("All tasks spawned");
}
