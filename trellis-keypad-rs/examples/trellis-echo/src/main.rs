//! Trellis echo example
//!
//! Demonstrates basic usage of the trellis-driver crate on the Raspberry Pi
//! Pico 2. Waits for the Trellis INT pin to fire, scans the keys, toggles
//! the LED under every key that was just pressed and logs presses and
//! releases via defmt.
//!
//! # Wiring
//!
//! | Signal      | Pico 2 Pin | Notes                        |
//! |-------------|------------|------------------------------|
//! | I2C0 SDA    | GP20       |                              |
//! | I2C0 SCL    | GP21       |                              |
//! | TRELLIS INT | GP19       | Active-low, pull-up enabled  |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_time::{Delay, Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use trellis_driver::{BlinkRate, Trellis, DEFAULT_ADDRESS, KEY_COUNT};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

/// Debounce interval between the INT edge and the key scan.
const DEBOUNCE_MS: u64 = 20;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // --- I2C bus (GP20 = SDA, GP21 = SCL) ---
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_21, p.PIN_20, i2c::Config::default());

    // --- Trellis INT pin (GP19, active-low) ---
    let mut int_pin = Input::new(p.PIN_19, Pull::Up);

    // --- Trellis board ---
    let mut trellis = Trellis::new(i2c, DEFAULT_ADDRESS, 8);
    trellis.configure(&mut Delay);

    // Light every LED once so a dead board is obvious at power-on.
    for key in 0..KEY_COUNT as u8 {
        trellis.set_led(key);
    }
    trellis.set_blink_rate(BlinkRate::TwoHz);
    trellis.write_display();
    Timer::after(Duration::from_millis(1000)).await;

    trellis.clear();
    trellis.set_blink_rate(BlinkRate::Off);
    trellis.write_display();

    // Prime both snapshots so the first scan does not report stale edges.
    trellis.read_switches();

    info!("Trellis echo started — press keys to toggle their LEDs");

    // Main loop: sleep until interrupt, scan, toggle, repeat.
    loop {
        int_pin.wait_for_low().await;
        Timer::after(Duration::from_millis(DEBOUNCE_MS)).await;

        if !trellis.read_switches() {
            continue;
        }

        for key in 0..KEY_COUNT as u8 {
            if trellis.just_pressed(key) {
                info!("Key {} pressed", key);
                if trellis.is_led(key) {
                    trellis.clear_led(key);
                } else {
                    trellis.set_led(key);
                }
            }
            if trellis.just_released(key) {
                info!("Key {} released", key);
            }
        }

        trellis.write_display();
    }
}
