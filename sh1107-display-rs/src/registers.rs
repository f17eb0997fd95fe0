//! SH1107 command and register constants.
//!
//! Every command byte travels as a two-byte write `[COMMAND_PREFIX, cmd]`.
//! Display RAM is written as `[DATA_REGISTER, bytes...]`. Commands that take
//! a parameter are followed by the parameter as a separate command write.

// ---------------------------------------------------------------------------
// Wire framing
// ---------------------------------------------------------------------------

/// Control byte preceding a single command byte (Co = 1, D/C# = 0).
pub const COMMAND_PREFIX: u8 = 0x80;

/// Control byte preceding a run of display RAM bytes (Co = 0, D/C# = 1).
pub const DATA_REGISTER: u8 = 0x40;

// ---------------------------------------------------------------------------
// Fundamental commands
// ---------------------------------------------------------------------------

/// Display on/off. OR with `0x01` to turn the panel on.
pub const SET_DISP: u8 = 0xAE;

/// Memory addressing mode. OR with `0x01` for vertical (column) addressing.
pub const SET_MEM_MODE: u8 = 0x20;

/// Page address base; OR with the page index (0–15).
pub const SET_PAGE_ADDR: u8 = 0xB0;

/// Column address, low nibble base.
pub const SET_COL_LO_ADDR: u8 = 0x00;

/// Column address, high nibble base.
pub const SET_COL_HI_ADDR: u8 = 0x10;

/// Display start line (double-byte command).
pub const SET_DISP_START_LINE: u8 = 0xDC;

/// Segment remap. `0x00` normal, `0x01` reversed.
pub const SET_SEG_REMAP: u8 = 0xA0;

/// Multiplex ratio (double-byte command).
pub const SET_MUX_RATIO: u8 = 0xA8;

/// COM output scan direction. OR with `0x08` in vertical addressing mode.
pub const SET_COM_OUT_DIR: u8 = 0xC0;

/// Display offset (double-byte command).
pub const SET_DISP_OFFSET: u8 = 0xD3;

/// Display clock divide ratio / oscillator frequency (double-byte command).
pub const SET_DISP_CLK_DIV: u8 = 0xD5;

/// Pre-charge / dis-charge period (double-byte command).
pub const SET_PRECHARGE: u8 = 0xD9;

/// VCOM deselect level (double-byte command).
pub const SET_VCOM_DESEL: u8 = 0xDB;

/// DC-DC converter control (double-byte command).
pub const SET_DCDC_MODE: u8 = 0xAD;

/// Contrast control (double-byte command).
pub const SET_CONTRAST: u8 = 0x81;

/// Entire display on. `0xA4` follows RAM contents.
pub const SET_ENTIRE_ON: u8 = 0xA4;

/// Normal / inverse display. `0xA6` is normal polarity.
pub const SET_NORM_INV: u8 = 0xA6;

// ---------------------------------------------------------------------------
// Command parameters
// ---------------------------------------------------------------------------

/// Multiplex ratio for a 128-row COM scan.
pub const MUX_RATIO_128: u8 = 0x7F;

/// Display offset for non-square panels (128×64 / 64×128).
pub const DISP_OFFSET_RECT: u8 = 0x60;

/// Display offset for square panels (128×128).
pub const DISP_OFFSET_SQUARE: u8 = 0x00;

/// Clock divide ratio 1, oscillator frequency +0%.
pub const CLK_DIV_DEFAULT: u8 = 0x50;

/// Pre-charge period when the panel is driven from an external VCC.
pub const PRECHARGE_EXTERNAL_VCC: u8 = 0x22;

/// Pre-charge period when the on-chip charge pump generates VCC.
pub const PRECHARGE_INTERNAL_VCC: u8 = 0xF1;

/// VCOM deselect level used by the FeatherWing.
pub const VCOM_DESEL_LEVEL: u8 = 0x35;

/// DC-DC converter on.
pub const DCDC_ON: u8 = 0x81;

/// Default contrast.
pub const CONTRAST_DEFAULT: u8 = 0x10;

// ---------------------------------------------------------------------------
// Driver constants
// ---------------------------------------------------------------------------

/// Default I2C address of the SH1107 FeatherWing.
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Framebuffer capacity in bytes, sized for the largest panel (128×128).
pub const BUFFER_CAPACITY: usize = 128 * 128 / 8;

/// Longest contiguous data run sent in one transaction (one 128-px page).
pub const MAX_DATA_CHUNK: usize = 128;
