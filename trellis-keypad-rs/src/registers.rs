//! HT16K33 command constants for the Adafruit Trellis.
//!
//! The HT16K33 takes single-byte commands: the high nibble selects the
//! function and the low nibble carries its argument. Display RAM and key
//! RAM are accessed like registers, by address byte followed by data.

// ---------------------------------------------------------------------------
// System setup
// ---------------------------------------------------------------------------

/// System setup register with the internal oscillator turned on.
pub const OSCILLATOR_ON: u8 = 0x21;

// ---------------------------------------------------------------------------
// Display setup
// ---------------------------------------------------------------------------

/// Display setup register base.
/// Full command: `BLINK_CMD | BLINK_DISPLAY_ON | (rate << 1)`.
pub const BLINK_CMD: u8 = 0x80;

/// Display-on bit of the display setup register.
pub const BLINK_DISPLAY_ON: u8 = 0x01;

/// Dimming register base. Full command: `BRIGHTNESS_CMD | level`.
pub const BRIGHTNESS_CMD: u8 = 0xE0;

/// ROW/INT set: the ROW15/INT pin becomes an active-low key interrupt.
pub const ROW_INT_SET: u8 = 0xA1;

// ---------------------------------------------------------------------------
// RAM addresses
// ---------------------------------------------------------------------------

/// First address of the 16-byte LED display RAM.
pub const DISPLAY_RAM_ADDR: u8 = 0x00;

/// First address of the key data RAM (6 bytes).
pub const KEY_READ_CMD: u8 = 0x40;

// ---------------------------------------------------------------------------
// Driver constants
// ---------------------------------------------------------------------------

/// Default I2C address of a Trellis with no address jumpers closed.
pub const DEFAULT_ADDRESS: u8 = 0x70;

/// Highest dimming level the HT16K33 accepts.
pub const MAX_BRIGHTNESS: u8 = 15;

/// Time to let the oscillator settle after power-on before configuring the
/// display, in milliseconds.
pub const OSCILLATOR_SETTLE_MS: u32 = 1000;

/// Number of 16-bit rows of LED display RAM.
pub const LED_WORDS: usize = 8;

/// Number of key RAM bytes read per scan.
pub const KEY_BYTES: usize = 6;

/// Number of keys (and LEDs) on one Trellis board.
pub const KEY_COUNT: usize = 16;
