//! FeatherWing OLED example
//!
//! Standalone hardware demonstration that exercises [`Sh1107`] directly on
//! the Adafruit 128×64 OLED FeatherWing. Renders 4 horizontal progress bars
//! in landscape (column addressing) and cycles their values, then every
//! few seconds blanks the panel with `clear_display()`.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes           |
//! |-----------|------------|-----------------|
//! | I2C0 SDA  | GP20       |                 |
//! | I2C0 SCL  | GP21       |                 |
//! | OLED VCC  | 3V3        |                 |
//! | OLED GND  | GND        |                 |
//!
//! # Progress Bar Geometry
//!
//! | Property        | Value                                          |
//! |-----------------|------------------------------------------------|
//! | Bar row height  | 16 px (4 bars × 16 = 64 px = full display)    |
//! | Bar fill height | 14 px (1 px margin top and bottom per row)     |
//! | Bar pixel width | `value * 128 / 127`                            |
//! | Value range     | 0–127                                          |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::i2c::{self, I2c};
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use sh1107_driver::{Sh1107, DEFAULT_ADDRESS};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

/// Frames between full-panel blanking.
const FRAMES_PER_CYCLE: u32 = 128;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("FeatherWing OLED example starting");

    // --- I2C bus (GP20 = SDA, GP21 = SCL), 400 kHz ---
    let mut config = i2c::Config::default();
    config.frequency = 400_000;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_21, p.PIN_20, config);

    // Landscape FeatherWing: 128 × 64, charge pump on.
    let mut oled = Sh1107::new(i2c, DEFAULT_ADDRESS, 128, 64, false);
    if let Err(e) = oled.configure() {
        error!("OLED configure failed: {}", e);
        return;
    }
    info!("OLED configured ({})", oled.addressing_mode());

    // Bar values 0–127, offset so bars are visually distinct.
    let mut values: [u8; 4] = [0, 32, 64, 96];
    let mut frame: u32 = 0;

    loop {
        oled.clear_buffer();

        for (i, &v) in values.iter().enumerate() {
            let y = (i as i32) * 16;
            let bar_width = (v as u32) * 128 / 127;

            Rectangle::new(Point::new(0, y + 1), Size::new(bar_width, 14))
                .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
                .draw(&mut oled)
                .ok();
        }

        oled.display();

        for v in values.iter_mut() {
            *v = (*v + 1) % 128;
        }

        frame += 1;
        if frame % FRAMES_PER_CYCLE == 0 {
            oled.clear_display();
            Timer::after(Duration::from_millis(500)).await;
        }

        Timer::after(Duration::from_millis(33)).await; // ~30 Hz
    }
}
