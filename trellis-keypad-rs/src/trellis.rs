//! High-level interface for the Adafruit Trellis keypad.
//!
//! [`Trellis`] keeps the LED bitmap and the last two key scans in memory
//! and translates key numbers 0–15 through the board's fixed wiring tables.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::ht16k33::Ht16k33;
use crate::registers::{
    BLINK_CMD, BLINK_DISPLAY_ON, BRIGHTNESS_CMD, KEY_BYTES, KEY_COUNT, LED_WORDS, MAX_BRIGHTNESS,
    OSCILLATOR_ON, OSCILLATOR_SETTLE_MS, ROW_INT_SET,
};

/// Hardware blink rate of the whole LED matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkRate {
    Off = 0,
    TwoHz = 1,
    OneHz = 2,
    HalfHz = 3,
}

/// Blocking interface to one Adafruit Trellis board.
///
/// LED changes are made in memory and pushed with
/// [`write_display`](Self::write_display). Key state is refreshed by
/// polling [`read_switches`](Self::read_switches), which keeps the previous
/// scan so press and release edges can be detected.
///
/// Bus failures are logged (with the `defmt` feature) and the operation is
/// abandoned; nothing is retried. Key and LED numbers above 15 are ignored.
///
/// # Example
///
/// ```no_run
/// use trellis_driver::{Trellis, DEFAULT_ADDRESS};
///
/// # fn example(i2c: impl embedded_hal::i2c::I2c, mut delay: impl embedded_hal::delay::DelayNs) {
/// let mut trellis = Trellis::new(i2c, DEFAULT_ADDRESS, 15);
/// trellis.configure(&mut delay);
///
/// if trellis.read_switches() && trellis.just_pressed(5) {
///     trellis.set_led(5);
///     trellis.write_display();
/// }
/// # }
/// ```
pub struct Trellis<I2C> {
    chip: Ht16k33<I2C>,
    brightness: u8,
    /// LED display RAM mirror, one 16-bit word per HT16K33 row.
    led_buffer: [u16; LED_WORDS],
    keys: [u8; KEY_BYTES],
    last_keys: [u8; KEY_BYTES],
}

impl<I2C> Trellis<I2C> {
    /// Key number → LED RAM bit position (`word = pos >> 4`,
    /// `bit = pos & 0x0F`).
    pub const LED_LUT: [u8; KEY_COUNT] = [
        0x3A, 0x37, 0x35, 0x34, //
        0x28, 0x29, 0x23, 0x24, //
        0x16, 0x1B, 0x11, 0x10, //
        0x0E, 0x0D, 0x0C, 0x02,
    ];

    /// Key number → key RAM bit position (`byte = pos >> 4`,
    /// `bit = pos & 0x0F`).
    pub const BUTTON_LUT: [u8; KEY_COUNT] = [
        0x07, 0x04, 0x02, 0x22, //
        0x05, 0x06, 0x00, 0x01, //
        0x03, 0x10, 0x30, 0x21, //
        0x13, 0x12, 0x11, 0x31,
    ];
}

impl<I2C> Trellis<I2C>
where
    I2C: I2c,
{
    /// Create a new Trellis interface.
    ///
    /// No I2C traffic is generated; call [`configure`](Self::configure)
    /// before use.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access)
    /// * `address` — 7-bit I2C device address (typically 0x70)
    /// * `brightness` — LED dimming level, clamped to 0–15
    pub fn new(i2c: I2C, address: u8, brightness: u8) -> Self {
        Self {
            chip: Ht16k33::new(i2c, address),
            brightness: brightness.min(MAX_BRIGHTNESS),
            led_buffer: [0; LED_WORDS],
            keys: [0; KEY_BYTES],
            last_keys: [0; KEY_BYTES],
        }
    }

    // -----------------------------------------------------------------------
    // Setup
    // -----------------------------------------------------------------------

    /// Start the oscillator and bring up the display.
    ///
    /// Blocks for [`OSCILLATOR_SETTLE_MS`] on `delay` after starting the
    /// oscillator, then turns blinking off, applies the brightness and
    /// routes key interrupts to the INT pin. The first bus failure is logged
    /// and abandons the remaining steps.
    pub fn configure<D>(&mut self, delay: &mut D)
    where
        D: DelayNs,
    {
        if let Err(_e) = self.chip.write_command(OSCILLATOR_ON) {
            #[cfg(feature = "defmt")]
            defmt::error!(
                "Trellis: could not turn oscillator on: {}",
                embedded_hal::i2c::Error::kind(&_e)
            );
            return;
        }

        delay.delay_ms(OSCILLATOR_SETTLE_MS);

        let setup = [
            blink_command(BlinkRate::Off),
            BRIGHTNESS_CMD | self.brightness,
            ROW_INT_SET,
        ];
        for command in setup {
            if let Err(_e) = self.chip.write_command(command) {
                #[cfg(feature = "defmt")]
                defmt::error!(
                    "Trellis: setup command {=u8:#x} failed: {}",
                    command,
                    embedded_hal::i2c::Error::kind(&_e)
                );
                return;
            }
        }

        #[cfg(feature = "defmt")]
        defmt::info!("Trellis configured (brightness {})", self.brightness);
    }

    /// Change the LED brightness (clamped to 0–15).
    pub fn set_brightness(&mut self, level: u8) {
        self.brightness = level.min(MAX_BRIGHTNESS);
        if let Err(_e) = self.chip.write_command(BRIGHTNESS_CMD | self.brightness) {
            #[cfg(feature = "defmt")]
            defmt::error!(
                "Trellis: could not set brightness: {}",
                embedded_hal::i2c::Error::kind(&_e)
            );
        }
    }

    /// Current LED brightness, 0–15.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Set the hardware blink rate. The display stays on.
    pub fn set_blink_rate(&mut self, rate: BlinkRate) {
        if let Err(_e) = self.chip.write_command(blink_command(rate)) {
            #[cfg(feature = "defmt")]
            defmt::error!(
                "Trellis: could not set blink rate: {}",
                embedded_hal::i2c::Error::kind(&_e)
            );
        }
    }

    // -----------------------------------------------------------------------
    // LEDs
    // -----------------------------------------------------------------------

    /// Turn an LED on in memory.
    pub fn set_led(&mut self, led: u8) {
        if let Some((word, mask)) = led_position(led) {
            self.led_buffer[word] |= mask;
        }
    }

    /// Turn an LED off in memory.
    pub fn clear_led(&mut self, led: u8) {
        if let Some((word, mask)) = led_position(led) {
            self.led_buffer[word] &= !mask;
        }
    }

    /// Check whether an LED is on in memory.
    pub fn is_led(&self, led: u8) -> bool {
        match led_position(led) {
            Some((word, mask)) => self.led_buffer[word] & mask != 0,
            None => false,
        }
    }

    /// Turn every LED off in memory.
    pub fn clear(&mut self) {
        self.led_buffer = [0; LED_WORDS];
    }

    /// Push the in-memory LED bitmap to the board.
    pub fn write_display(&mut self) {
        if let Err(_e) = self.chip.write_display_ram(&self.led_buffer) {
            #[cfg(feature = "defmt")]
            defmt::error!(
                "Trellis: could not write display: {}",
                embedded_hal::i2c::Error::kind(&_e)
            );
        }
    }

    // -----------------------------------------------------------------------
    // Keys
    // -----------------------------------------------------------------------

    /// Scan the keys.
    ///
    /// The previous scan becomes the "was" snapshot and the new scan the
    /// "is" snapshot. Returns `true` if anything changed since the previous
    /// scan. On a bus failure both snapshots are kept and `false` is
    /// returned.
    pub fn read_switches(&mut self) -> bool {
        match self.chip.read_keys() {
            Ok(keys) => {
                self.last_keys = self.keys;
                self.keys = keys;
                self.keys != self.last_keys
            }
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "Trellis: key read failed: {}",
                    embedded_hal::i2c::Error::kind(&_e)
                );
                false
            }
        }
    }

    /// Return the lowest-numbered key currently held down.
    ///
    /// Reads the board directly and leaves the stored snapshots untouched.
    pub fn read_single_switch(&mut self) -> Option<u8> {
        match self.chip.read_keys() {
            Ok(keys) => (0..KEY_COUNT as u8).find(|&key| key_bit(&keys, key)),
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "Trellis: key read failed: {}",
                    embedded_hal::i2c::Error::kind(&_e)
                );
                None
            }
        }
    }

    /// Key is down in the latest scan.
    pub fn is_key_pressed(&self, key: u8) -> bool {
        key_bit(&self.keys, key)
    }

    /// Key was down in the scan before the latest one.
    pub fn was_key_pressed(&self, key: u8) -> bool {
        key_bit(&self.last_keys, key)
    }

    /// Key went down between the last two scans.
    pub fn just_pressed(&self, key: u8) -> bool {
        self.is_key_pressed(key) && !self.was_key_pressed(key)
    }

    /// Key came up between the last two scans.
    pub fn just_released(&self, key: u8) -> bool {
        !self.is_key_pressed(key) && self.was_key_pressed(key)
    }

    /// Consume the driver and hand back the I2C peripheral.
    pub fn release(self) -> I2C {
        self.chip.release()
    }
}

fn blink_command(rate: BlinkRate) -> u8 {
    BLINK_CMD | BLINK_DISPLAY_ON | ((rate as u8) << 1)
}

fn led_position(led: u8) -> Option<(usize, u16)> {
    let pos = *Trellis::<()>::LED_LUT.get(usize::from(led))?;
    Some((usize::from(pos >> 4), 1 << (pos & 0x0F)))
}

fn key_bit(keys: &[u8; KEY_BYTES], key: u8) -> bool {
    match Trellis::<()>::BUTTON_LUT.get(usize::from(key)) {
        Some(&pos) => keys[usize::from(pos >> 4)] & (1 << (pos & 0x0F)) != 0,
        None => false,
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
