//! Low-level SH1107 bus interface.
//!
//! Provides the two transport primitives the display needs: a single
//! command write and a data-register write. Errors are returned raw; the
//! device layer in `driver.rs` decides what to do with them.
//!
//! This module is crate-private — consumers interact with
//! [`Sh1107`](crate::Sh1107) instead.

use embedded_hal::i2c::I2c;

use crate::registers::{COMMAND_PREFIX, DATA_REGISTER, MAX_DATA_CHUNK};

/// Owns the I2C peripheral and frames bytes for the SH1107.
pub(crate) struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new interface.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access)
    /// * `address` — 7-bit I2C device address (typically 0x3C)
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Send one command byte, framed as `[0x80, command]`.
    pub fn write_command(&mut self, command: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[COMMAND_PREFIX, command])
    }

    /// Send a sequence of command bytes, stopping at the first failure.
    pub fn write_commands(&mut self, commands: &[u8]) -> Result<(), I2C::Error> {
        for &command in commands {
            self.write_command(command)?;
        }
        Ok(())
    }

    /// Write a run of display RAM bytes to the data register.
    ///
    /// The register byte and the payload go out as one write transaction:
    /// `[0x40, data[0], data[1], ...]`. `data` must not exceed
    /// [`MAX_DATA_CHUNK`] bytes.
    pub fn write_data(&mut self, data: &[u8]) -> Result<(), I2C::Error> {
        debug_assert!(data.len() <= MAX_DATA_CHUNK);

        let mut buf = [0u8; MAX_DATA_CHUNK + 1];
        buf[0] = DATA_REGISTER;
        buf[1..=data.len()].copy_from_slice(data);

        self.i2c.write(self.address, &buf[..=data.len()])
    }

    /// Give the I2C peripheral back to the caller.
    pub fn release(self) -> I2C {
        self.i2c
    }
}
