//! Low-level HT16K33 bus primitives.
//!
//! Frames single-byte commands, the LED RAM write and the key RAM read.
//! Errors are returned raw; [`Trellis`](crate::Trellis) logs them.
//!
//! This module is crate-private — consumers interact with
//! [`Trellis`](crate::Trellis) instead.

use embedded_hal::i2c::I2c;

use crate::registers::{DISPLAY_RAM_ADDR, KEY_BYTES, KEY_READ_CMD, LED_WORDS};

/// Owns an I2C peripheral and talks to one HT16K33.
pub(crate) struct Ht16k33<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> Ht16k33<I2C>
where
    I2C: I2c,
{
    /// Create a new HT16K33 driver.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access)
    /// * `address` — 7-bit I2C device address (typically 0x70)
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Send a single command byte.
    pub fn write_command(&mut self, command: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[command])
    }

    /// Write all of display RAM in one transaction.
    ///
    /// Each 16-bit row goes out little-endian, after the RAM start address:
    /// `[0x00, row0_lo, row0_hi, row1_lo, ..., row7_hi]`.
    pub fn write_display_ram(&mut self, rows: &[u16; LED_WORDS]) -> Result<(), I2C::Error> {
        let mut buf = [0u8; 1 + 2 * LED_WORDS];
        buf[0] = DISPLAY_RAM_ADDR;
        for (i, row) in rows.iter().enumerate() {
            buf[1 + 2 * i..3 + 2 * i].copy_from_slice(&row.to_le_bytes());
        }

        self.i2c.write(self.address, &buf)
    }

    /// Read the raw key RAM.
    ///
    /// Writes the key RAM address, then reads [`KEY_BYTES`] bytes with a
    /// repeated start.
    pub fn read_keys(&mut self) -> Result<[u8; KEY_BYTES], I2C::Error> {
        let mut buf = [0u8; KEY_BYTES];
        self.i2c.write_read(self.address, &[KEY_READ_CMD], &mut buf)?;
        Ok(buf)
    }

    /// Give the I2C peripheral back to the caller.
    pub fn release(self) -> I2C {
        self.i2c
    }
}
