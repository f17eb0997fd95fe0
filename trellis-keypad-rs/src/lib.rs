//! Blocking driver for the Adafruit Trellis 4×4 keypad.
//!
//! This crate provides an `embedded-hal` I2C driver for the HT16K33-based
//! Adafruit Trellis (Product #1616): sixteen momentary keys, each with an
//! LED underneath.
//!
//! # Architecture
//!
//! The crate is split into two layers:
//!
//! - **`ht16k33`** (crate-private) — command, LED RAM and key RAM bus
//!   primitives.
//! - **[`Trellis`]** (public) — LED bitmap and key snapshots, translated
//!   from key numbers 0–15 to the board's wiring.
//!
//! # Quick start
//!
//! ```no_run
//! use trellis_driver::{Trellis, DEFAULT_ADDRESS};
//!
//! # fn example(i2c: impl embedded_hal::i2c::I2c, mut delay: impl embedded_hal::delay::DelayNs) {
//! let mut trellis = Trellis::new(i2c, DEFAULT_ADDRESS, 8);
//! trellis.configure(&mut delay);
//!
//! loop {
//!     if trellis.read_switches() {
//!         for key in 0..16 {
//!             if trellis.just_pressed(key) {
//!                 trellis.set_led(key);
//!             }
//!         }
//!         trellis.write_display();
//!     }
//!     delay.delay_ms(30);
//! }
//! # }
//! ```
//!
//! # Features
//!
//! - **`defmt`** — log bus failures via [`defmt`] and enable
//!   [`defmt::Format`] on public types.

#![no_std]

pub use registers::{DEFAULT_ADDRESS, KEY_COUNT, MAX_BRIGHTNESS, OSCILLATOR_SETTLE_MS};
pub use trellis::{BlinkRate, Trellis};

mod ht16k33;
mod registers;
mod trellis;
