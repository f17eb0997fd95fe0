//! Blocking I2C driver for the SH1107 OLED controller.
//!
//! This crate provides [`Sh1107`], a framebuffer-backed driver for the
//! SH1107 as found on the Adafruit 128×64 OLED FeatherWing and 128×128
//! OLED breakouts.
//!
//! # Architecture
//!
//! - **`interface`** (crate-private) — the two bus primitives: a framed
//!   command write and a data-register write.
//! - **[`geometry`]** — supported panel sizes and the page/column
//!   framebuffer addressing formulas.
//! - **[`Sh1107`]** (public) — configuration, pixel access, bulk buffer
//!   replacement and flush.
//! - **`graphics`** — `embedded-graphics` [`DrawTarget`] implementation.
//!
//! # Quick start
//!
//! ```no_run
//! use sh1107_driver::{Sh1107, DEFAULT_ADDRESS};
//!
//! # fn example(i2c: impl embedded_hal::i2c::I2c) {
//! // 64 wide × 128 tall uses page addressing.
//! let mut oled = Sh1107::new(i2c, DEFAULT_ADDRESS, 64, 128, false);
//! oled.configure().unwrap();
//!
//! for y in 0..128 {
//!     oled.set_pixel(y / 2, y, true);
//! }
//! oled.display();
//! # }
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging of bus failures via [`defmt`], and
//!   [`defmt::Format`] implementations on public types.
//!
//! [`DrawTarget`]: embedded_graphics::draw_target::DrawTarget

#![no_std]

pub mod driver;
pub mod error;
pub mod geometry;
mod graphics;
mod interface;
pub mod registers;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use driver::Sh1107;
pub use error::DisplayError;
pub use geometry::{AddressingMode, Dimensions};
pub use registers::DEFAULT_ADDRESS;
