//! Error types for the SH1107 display driver.

use core::fmt;

/// Errors reported to the caller by [`Sh1107`](crate::Sh1107).
///
/// Bus failures are not part of this enum: the driver logs them and
/// abandons the operation instead of propagating them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// The requested width × height is not a panel the SH1107 supports
    /// (128×64, 64×128 or 128×128). The device stays unconfigured.
    UnsupportedDimensions { width: u16, height: u16 },

    /// A bulk buffer replacement did not match the framebuffer length.
    /// The framebuffer is left unchanged.
    BufferSizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DisplayError::UnsupportedDimensions { width, height } => {
                write!(f, "Unsupported display dimensions {}x{}", width, height)
            }
            DisplayError::BufferSizeMismatch { expected, actual } => write!(
                f,
                "Buffer size mismatch (expected {} bytes, got {})",
                expected, actual
            ),
        }
    }
}
