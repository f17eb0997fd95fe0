//! Panel geometry and framebuffer addressing.
//!
//! The SH1107 supports two ways of walking display RAM, and the framebuffer
//! layout has to match whichever one the chip was configured for:
//!
//! ```text
//! Page mode (64×128, 128×128)        Column mode (128×64)
//!
//!   byte = x + (y / 8) * width         byte = (x * height + y) / 8
//!   bit  = y % 8                       bit  = y % 8
//!
//!   page 0: [x0][x1][x2] ... [xW-1]    col 0: [p0][p1] ... [pH/8-1]
//!   page 1: [x0][x1][x2] ... [xW-1]    col 1: [p0][p1] ... [pH/8-1]
//! ```
//!
//! In both layouts each byte holds eight vertically stacked pixels, LSB on
//! top. Only the order in which those bytes are stored differs.

/// How the framebuffer bytes are ordered, and how the chip auto-increments
/// its RAM pointer during a flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressingMode {
    /// Bytes ordered page by page; one flush transfer per 8-pixel row band.
    Page,
    /// Bytes ordered column by column (vertical addressing); one flush
    /// transfer per pixel column.
    Column,
}

/// Panel sizes the SH1107 can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dimensions {
    /// 128 wide × 64 tall, the FeatherWing in landscape. Column mode.
    W128H64,
    /// 64 wide × 128 tall, the FeatherWing in portrait. Page mode.
    W64H128,
    /// 128 × 128 square panel. Page mode.
    W128H128,
}

impl Dimensions {
    /// Validate a width/height pair.
    ///
    /// Returns `None` for any size the chip cannot drive.
    pub fn from_size(width: u16, height: u16) -> Option<Self> {
        match (width, height) {
            (128, 64) => Some(Dimensions::W128H64),
            (64, 128) => Some(Dimensions::W64H128),
            (128, 128) => Some(Dimensions::W128H128),
            _ => None,
        }
    }

    pub const fn width(self) -> u16 {
        match self {
            Dimensions::W128H64 | Dimensions::W128H128 => 128,
            Dimensions::W64H128 => 64,
        }
    }

    pub const fn height(self) -> u16 {
        match self {
            Dimensions::W128H64 => 64,
            Dimensions::W64H128 | Dimensions::W128H128 => 128,
        }
    }

    /// Framebuffer length in bytes (`width * height / 8`).
    pub const fn buffer_len(self) -> usize {
        self.width() as usize * self.height() as usize / 8
    }

    /// Addressing mode the chip must be put in for this panel size.
    pub const fn addressing_mode(self) -> AddressingMode {
        match self {
            Dimensions::W128H64 => AddressingMode::Column,
            Dimensions::W64H128 | Dimensions::W128H128 => AddressingMode::Page,
        }
    }
}

/// Locate pixel `(x, y)` in the framebuffer.
///
/// Returns the byte index and the single-bit mask within that byte, or
/// `None` if the pixel lies outside the panel. Both pixel reads and writes
/// go through here so the two can never disagree on layout.
pub(crate) fn pixel_index(
    mode: AddressingMode,
    width: u16,
    height: u16,
    x: i32,
    y: i32,
) -> Option<(usize, u8)> {
    if x < 0 || y < 0 || x >= i32::from(width) || y >= i32::from(height) {
        return None;
    }

    let (x, y) = (x as usize, y as usize);
    let index = match mode {
        AddressingMode::Page => x + (y / 8) * usize::from(width),
        AddressingMode::Column => (x * usize::from(height) + y) / 8,
    };

    Some((index, 1 << (y % 8)))
}

// ── Unit Tests ───────────────────────────────────────────────────────
