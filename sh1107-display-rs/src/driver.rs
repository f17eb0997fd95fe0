//! Core SH1107 driver: framebuffer ownership, pixel addressing and flush.
//!
//! [`Sh1107`] manages the display lifecycle: construction without I2C
//! traffic, explicit initialisation, in-memory drawing and frame buffer
//! flush.

use embedded_hal::i2c::I2c;
use heapless::Vec;

use crate::error::DisplayError;
use crate::geometry::{pixel_index, AddressingMode, Dimensions};
use crate::interface::I2cInterface;
use crate::registers::*;

/// Number of command bytes in the power-on initialisation sequence.
pub const INIT_SEQUENCE_LEN: usize = 23;

/// Build the chip initialisation sequence for a panel.
///
/// The order is mandated by the SH1107 power-on procedure; the only
/// variable bytes are the addressing mode, the COM scan direction, the
/// display offset and the pre-charge period.
pub fn init_sequence(dimensions: Dimensions, external_vcc: bool) -> [u8; INIT_SEQUENCE_LEN] {
    let vertical = dimensions.addressing_mode() == AddressingMode::Column;

    let mem_mode = if vertical { SET_MEM_MODE | 0x01 } else { SET_MEM_MODE };
    let com_dir = if vertical { SET_COM_OUT_DIR | 0x08 } else { SET_COM_OUT_DIR };
    let offset = if dimensions.width() != dimensions.height() {
        DISP_OFFSET_RECT
    } else {
        DISP_OFFSET_SQUARE
    };
    let precharge = if external_vcc {
        PRECHARGE_EXTERNAL_VCC
    } else {
        PRECHARGE_INTERNAL_VCC
    };

    [
        SET_DISP,
        mem_mode,
        SET_DISP_START_LINE,
        0x00,
        SET_SEG_REMAP,
        com_dir,
        SET_MUX_RATIO,
        MUX_RATIO_128,
        SET_DISP_OFFSET,
        offset,
        SET_DISP_CLK_DIV,
        CLK_DIV_DEFAULT,
        SET_PRECHARGE,
        precharge,
        SET_VCOM_DESEL,
        VCOM_DESEL_LEVEL,
        SET_DCDC_MODE,
        DCDC_ON,
        SET_CONTRAST,
        CONTRAST_DEFAULT,
        SET_ENTIRE_ON,
        SET_NORM_INV,
        SET_DISP | 0x01,
    ]
}

/// Blocking driver for an SH1107 OLED display over I2C.
///
/// Keeps a bit-packed framebuffer in memory and mirrors it to the panel on
/// [`display()`](Self::display).
///
/// # Lifecycle
///
/// 1. [`Sh1107::new()`] — stores the bus and panel parameters, no I2C traffic.
/// 2. [`Sh1107::configure()`] — validates the size, allocates the
///    framebuffer and sends the initialisation sequence.
/// 3. Draw with [`set_pixel()`](Self::set_pixel) (or any
///    `embedded-graphics` drawable).
/// 4. [`Sh1107::display()`] — transfers the framebuffer to the panel.
///
/// # Bus failures
///
/// Transport errors are logged (with the `defmt` feature) and the current
/// operation is abandoned. Nothing is retried; the next
/// [`display()`](Self::display) sends a complete frame again.
///
/// # Example
///
/// ```no_run
/// use sh1107_driver::{Sh1107, DEFAULT_ADDRESS};
///
/// # fn example(i2c: impl embedded_hal::i2c::I2c) {
/// let mut oled = Sh1107::new(i2c, DEFAULT_ADDRESS, 64, 128, false);
/// oled.configure().unwrap();
/// oled.set_pixel(10, 20, true);
/// oled.display();
/// # }
/// ```
pub struct Sh1107<I2C> {
    interface: I2cInterface<I2C>,
    width: u16,
    height: u16,
    external_vcc: bool,
    /// `Some` once `configure()` accepted the panel size.
    mode: Option<AddressingMode>,
    /// Exactly `width * height / 8` bytes when configured, empty otherwise.
    buffer: Vec<u8, BUFFER_CAPACITY>,
}

impl<I2C> Sh1107<I2C>
where
    I2C: I2c,
{
    /// Construct an unconfigured driver.
    ///
    /// No I2C traffic is generated. You **must** call
    /// [`configure()`](Self::configure) before drawing.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access).
    /// * `address` — 7-bit I2C device address (typically `0x3C`).
    /// * `width`, `height` — panel size in pixels.
    /// * `external_vcc` — `true` if the panel is powered from an external
    ///   VCC rather than the on-chip charge pump.
    pub fn new(i2c: I2C, address: u8, width: u16, height: u16, external_vcc: bool) -> Self {
        Self {
            interface: I2cInterface::new(i2c, address),
            width,
            height,
            external_vcc,
            mode: None,
            buffer: Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    /// Allocate the framebuffer and initialise the SH1107.
    ///
    /// Picks page addressing for 64×128 and 128×128 panels and column
    /// (vertical) addressing for 128×64, then sends the power-on command
    /// sequence. A bus failure during the sequence is logged and the rest
    /// of the sequence is skipped; calling `configure()` again restarts it.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::UnsupportedDimensions`] if the panel size is
    /// not one the chip supports. The device is then left unconfigured and
    /// every drawing operation is a no-op.
    pub fn configure(&mut self) -> Result<(), DisplayError> {
        self.buffer.clear();

        let Some(dimensions) = Dimensions::from_size(self.width, self.height) else {
            self.mode = None;
            #[cfg(feature = "defmt")]
            defmt::error!(
                "SH1107: unsupported dimensions {}x{}",
                self.width,
                self.height
            );
            return Err(DisplayError::UnsupportedDimensions {
                width: self.width,
                height: self.height,
            });
        };

        // BUFFER_CAPACITY covers the largest supported panel.
        let _ = self.buffer.resize(dimensions.buffer_len(), 0);
        self.mode = Some(dimensions.addressing_mode());

        let sequence = init_sequence(dimensions, self.external_vcc);
        if let Err(_e) = self.interface.write_commands(&sequence) {
            #[cfg(feature = "defmt")]
            defmt::error!(
                "SH1107: init sequence aborted: {}",
                embedded_hal::i2c::Error::kind(&_e)
            );
        } else {
            #[cfg(feature = "defmt")]
            defmt::info!(
                "SH1107 configured {}x{} ({})",
                self.width,
                self.height,
                dimensions.addressing_mode()
            );
        }

        Ok(())
    }

    /// Send a single command byte to the display.
    ///
    /// Best effort: a bus failure is logged, not returned.
    pub fn command(&mut self, command: u8) {
        if let Err(_e) = self.interface.write_command(command) {
            #[cfg(feature = "defmt")]
            defmt::error!(
                "SH1107: command {=u8:#x} failed: {}",
                command,
                embedded_hal::i2c::Error::kind(&_e)
            );
        }
    }

    // -----------------------------------------------------------------------
    // Framebuffer access
    // -----------------------------------------------------------------------

    /// Turn pixel `(x, y)` on or off in the framebuffer.
    ///
    /// Out-of-range coordinates are silently ignored, as is any write to an
    /// unconfigured device. No I2C traffic.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        let Some((index, mask)) = self.locate(x, y) else {
            return;
        };

        if on {
            self.buffer[index] |= mask;
        } else {
            self.buffer[index] &= !mask;
        }
    }

    /// Read pixel `(x, y)` back from the framebuffer.
    ///
    /// Returns `false` for out-of-range coordinates or an unconfigured
    /// device.
    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        match self.locate(x, y) {
            Some((index, mask)) => self.buffer[index] & mask != 0,
            None => false,
        }
    }

    /// Zero the in-memory framebuffer.
    ///
    /// Does **not** send any I2C traffic — the panel is unchanged until
    /// [`display()`](Self::display) is called.
    pub fn clear_buffer(&mut self) {
        self.fill(0x00);
    }

    /// Blank the framebuffer and push the blank frame to the panel.
    pub fn clear_display(&mut self) {
        self.clear_buffer();
        self.display();
    }

    /// Replace the whole framebuffer in one go.
    ///
    /// `bytes` is copied verbatim and must already be laid out for the
    /// configured [`AddressingMode`]. The panel is unchanged until the next
    /// [`display()`](Self::display).
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::BufferSizeMismatch`] if `bytes.len()` is not
    /// `width * height / 8`; the framebuffer is left untouched.
    pub fn set_buffer(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        if bytes.len() != self.buffer.len() {
            return Err(DisplayError::BufferSizeMismatch {
                expected: self.buffer.len(),
                actual: bytes.len(),
            });
        }

        self.buffer.copy_from_slice(bytes);
        Ok(())
    }

    /// Read-only view of the framebuffer (empty when unconfigured).
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    // -----------------------------------------------------------------------
    // Flush
    // -----------------------------------------------------------------------

    /// Transfer the framebuffer to the panel.
    ///
    /// Page mode sends one transfer of `width` bytes per page; column mode
    /// sends one transfer of `height / 8` bytes per column. Each transfer
    /// is preceded by the three commands that position the RAM pointer.
    ///
    /// The first bus failure aborts the rest of the frame. It is logged,
    /// not retried.
    pub fn display(&mut self) {
        if let Err(_e) = self.flush() {
            #[cfg(feature = "defmt")]
            defmt::error!(
                "SH1107: flush aborted: {}",
                embedded_hal::i2c::Error::kind(&_e)
            );
        }
    }

    fn flush(&mut self) -> Result<(), I2C::Error> {
        let Some(mode) = self.mode else {
            return Ok(());
        };

        match mode {
            AddressingMode::Page => {
                let width = usize::from(self.width);
                for (page, bytes) in self.buffer.chunks_exact(width).enumerate() {
                    self.interface.write_commands(&[
                        SET_PAGE_ADDR | page as u8,
                        SET_COL_LO_ADDR,
                        SET_COL_HI_ADDR,
                    ])?;
                    self.interface.write_data(bytes)?;
                }
            }
            AddressingMode::Column => {
                let pages = usize::from(self.height) / 8;
                for (col, bytes) in self.buffer.chunks_exact(pages).enumerate() {
                    let col = col as u8;
                    self.interface.write_commands(&[
                        SET_PAGE_ADDR,
                        SET_COL_LO_ADDR | (col & 0x0F),
                        SET_COL_HI_ADDR | ((col >> 4) & 0x0F),
                    ])?;
                    self.interface.write_data(bytes)?;
                }
            }
        }

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Panel size as `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Addressing mode chosen by `configure()`, or `None` if unconfigured.
    pub fn addressing_mode(&self) -> Option<AddressingMode> {
        self.mode
    }

    /// Check whether `configure()` accepted the panel size.
    ///
    /// No I2C traffic is generated.
    pub fn is_configured(&self) -> bool {
        self.mode.is_some()
    }

    /// Consume the driver and hand back the I2C peripheral.
    pub fn release(self) -> I2C {
        self.interface.release()
    }

    pub(crate) fn fill(&mut self, byte: u8) {
        self.buffer.fill(byte);
    }

    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        pixel_index(self.mode?, self.width, self.height, x, y)
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
    use std::vec::Vec as StdVec;

    const ADDR: u8 = DEFAULT_ADDRESS;

    fn command(byte: u8) -> I2cTransaction {
        I2cTransaction::write(ADDR, std::vec![COMMAND_PREFIX, byte])
    }

    fn data(bytes: &[u8]) -> I2cTransaction {
        let mut payload = std::vec![DATA_REGISTER];
        payload.extend_from_slice(bytes);
        I2cTransaction::write(ADDR, payload)
    }

    fn init_transactions(dimensions: Dimensions, external_vcc: bool) -> StdVec<I2cTransaction> {
        init_sequence(dimensions, external_vcc)
            .iter()
            .map(|&b| command(b))
            .collect()
    }

    // Helper: a configured display whose mock expects the init sequence
    // followed by `then`.
    fn configured(
        width: u16,
        height: u16,
        then: StdVec<I2cTransaction>,
    ) -> Sh1107<I2cMock> {
        let dims = Dimensions::from_size(width, height).unwrap();
        let mut expected = init_transactions(dims, false);
        expected.extend(then);
        let mut display = Sh1107::new(I2cMock::new(&expected), ADDR, width, height, false);
        display.configure().unwrap();
        display
    }

    // Helper: count command and data writes issued by a flush.
    fn flush_transactions(display: &Sh1107<I2cMock>) -> StdVec<I2cTransaction> {
        let (width, height) = display.dimensions();
        let mut expected = StdVec::new();
        match display.addressing_mode().unwrap() {
            AddressingMode::Page => {
                for (page, bytes) in display.buffer().chunks(width as usize).enumerate() {
                    expected.push(command(SET_PAGE_ADDR | page as u8));
                    expected.push(command(SET_COL_LO_ADDR));
                    expected.push(command(SET_COL_HI_ADDR));
                    expected.push(data(bytes));
                }
            }
            AddressingMode::Column => {
                for (col, bytes) in display.buffer().chunks(height as usize / 8).enumerate() {
                    expected.push(command(SET_PAGE_ADDR));
                    expected.push(command(SET_COL_LO_ADDR | (col as u8 & 0x0F)));
                    expected.push(command(SET_COL_HI_ADDR | (col as u8 >> 4)));
                    expected.push(data(bytes));
                }
            }
        }
        expected
    }

    // ── Initialisation ───────────────────────────────────────────────

    #[test]
    fn init_sequence_128x64_internal_vcc() {
        assert_eq!(
            init_sequence(Dimensions::W128H64, false),
            [
                0xAE, 0x21, 0xDC, 0x00, 0xA0, 0xC8, 0xA8, 0x7F, 0xD3, 0x60, 0xD5, 0x50,
                0xD9, 0xF1, 0xDB, 0x35, 0xAD, 0x81, 0x81, 0x10, 0xA4, 0xA6, 0xAF,
            ]
        );
    }

    #[test]
    fn init_sequence_64x128_external_vcc() {
        assert_eq!(
            init_sequence(Dimensions::W64H128, true),
            [
                0xAE, 0x20, 0xDC, 0x00, 0xA0, 0xC0, 0xA8, 0x7F, 0xD3, 0x60, 0xD5, 0x50,
                0xD9, 0x22, 0xDB, 0x35, 0xAD, 0x81, 0x81, 0x10, 0xA4, 0xA6, 0xAF,
            ]
        );
    }

    #[test]
    fn init_sequence_square_panel_has_zero_offset() {
        let seq = init_sequence(Dimensions::W128H128, false);
        assert_eq!(seq[8], SET_DISP_OFFSET);
        assert_eq!(seq[9], 0x00);
        assert_eq!(seq[1], SET_MEM_MODE);
    }

    #[test]
    fn configure_sends_init_sequence_and_allocates_buffer() {
        let expected = init_transactions(Dimensions::W128H64, true);
        let mut display = Sh1107::new(I2cMock::new(&expected), ADDR, 128, 64, true);

        assert!(!display.is_configured());
        assert!(display.configure().is_ok());
        assert!(display.is_configured());
        assert_eq!(display.addressing_mode(), Some(AddressingMode::Column));
        assert_eq!(display.buffer().len(), 1024);
        assert!(display.buffer().iter().all(|&b| b == 0));

        display.release().done();
    }

    #[test]
    fn configure_rejects_unsupported_dimensions_without_bus_traffic() {
        let expected: [I2cTransaction; 0] = [];
        let mut display = Sh1107::new(I2cMock::new(&expected), ADDR, 96, 96, false);

        assert_eq!(
            display.configure(),
            Err(DisplayError::UnsupportedDimensions { width: 96, height: 96 })
        );
        assert!(!display.is_configured());
        assert!(display.buffer().is_empty());

        // Everything is a no-op on an unconfigured device.
        display.set_pixel(0, 0, true);
        assert!(!display.get_pixel(0, 0));
        display.display();

        display.release().done();
    }

    #[test]
    fn configure_abandons_sequence_on_bus_failure() {
        let expected = [
            command(SET_DISP),
            command(SET_MEM_MODE).with_error(ErrorKind::Other),
        ];
        let mut display = Sh1107::new(I2cMock::new(&expected), ADDR, 64, 128, false);

        // Bus failures are logged, not returned.
        assert!(display.configure().is_ok());
        assert!(display.is_configured());

        display.release().done();
    }

    #[test]
    fn command_is_prefixed_with_control_byte() {
        let mut display = configured(64, 128, std::vec![command(0xA7)]);
        display.command(0xA7);
        display.release().done();
    }

    #[test]
    fn command_failure_is_swallowed() {
        let mut display = configured(
            64,
            128,
            std::vec![command(0xA7).with_error(ErrorKind::Other)],
        );
        display.command(0xA7);
        display.release().done();
    }

    // ── Pixels ───────────────────────────────────────────────────────

    #[test]
    fn set_get_round_trip_page_mode() {
        let mut display = configured(64, 128, StdVec::new());
        for &(x, y) in &[(0, 0), (63, 0), (0, 127), (63, 127), (17, 42)] {
            display.set_pixel(x, y, true);
            assert!(display.get_pixel(x, y), "({}, {}) should be on", x, y);
            display.set_pixel(x, y, false);
            assert!(!display.get_pixel(x, y), "({}, {}) should be off", x, y);
        }
        display.release().done();
    }

    #[test]
    fn set_get_round_trip_column_mode() {
        let mut display = configured(128, 64, StdVec::new());
        for &(x, y) in &[(0, 0), (127, 0), (0, 63), (127, 63), (42, 17)] {
            display.set_pixel(x, y, true);
            assert!(display.get_pixel(x, y), "({}, {}) should be on", x, y);
            display.set_pixel(x, y, false);
            assert!(!display.get_pixel(x, y), "({}, {}) should be off", x, y);
        }
        display.release().done();
    }

    #[test]
    fn column_mode_clear_leaves_neighbours() {
        let mut display = configured(128, 64, StdVec::new());
        display.set_pixel(4, 0, true);
        display.set_pixel(4, 1, true);
        display.set_pixel(4, 1, false);

        assert!(display.get_pixel(4, 0));
        assert!(!display.get_pixel(4, 1));
        assert_eq!(display.buffer()[32], 0x01);
        display.release().done();
    }

    #[test]
    fn every_pixel_maps_to_a_distinct_bit() {
        let mut display = configured(128, 64, StdVec::new());
        for x in 0..128 {
            for y in 0..64 {
                display.set_pixel(x, y, true);
            }
        }
        assert!(display.buffer().iter().all(|&b| b == 0xFF));
        display.release().done();
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut display = configured(64, 128, StdVec::new());
        for &(x, y) in &[(-1, 0), (0, -1), (64, 0), (0, 128), (1000, 1000)] {
            display.set_pixel(x, y, true);
            assert!(!display.get_pixel(x, y));
        }
        assert!(display.buffer().iter().all(|&b| b == 0));
        display.release().done();
    }

    #[test]
    fn clear_buffer_turns_everything_off() {
        let mut display = configured(128, 128, StdVec::new());
        display.set_pixel(0, 0, true);
        display.set_pixel(127, 127, true);
        display.set_pixel(64, 33, true);

        display.clear_buffer();

        assert!(display.buffer().iter().all(|&b| b == 0));
        assert!(!display.get_pixel(0, 0));
        assert!(!display.get_pixel(127, 127));
        assert!(!display.get_pixel(64, 33));
        display.release().done();
    }

    // ── Bulk buffer ──────────────────────────────────────────────────

    #[test]
    fn set_buffer_copies_verbatim() {
        let mut display = configured(64, 128, StdVec::new());
        let mut frame = [0u8; 1024];
        frame[0] = 0x01;
        frame[64] = 0x80;

        assert!(display.set_buffer(&frame).is_ok());
        assert_eq!(display.buffer(), &frame[..]);
        assert!(display.get_pixel(0, 0));
        assert!(display.get_pixel(0, 15));
        display.release().done();
    }

    #[test]
    fn set_buffer_rejects_wrong_length() {
        let mut display = configured(64, 128, StdVec::new());
        display.set_pixel(1, 1, true);
        let before: StdVec<u8> = display.buffer().to_vec();

        assert_eq!(
            display.set_buffer(&[0xFF; 1023]),
            Err(DisplayError::BufferSizeMismatch { expected: 1024, actual: 1023 })
        );
        assert_eq!(
            display.set_buffer(&[0xFF; 2048]),
            Err(DisplayError::BufferSizeMismatch { expected: 1024, actual: 2048 })
        );
        assert_eq!(display.buffer(), &before[..]);
        display.release().done();
    }

    // ── Flush ────────────────────────────────────────────────────────

    #[test]
    fn page_mode_flush_64x128() {
        // Build the expected traffic from a buffer with a few marker pixels.
        let mut probe = configured(64, 128, StdVec::new());
        probe.set_pixel(0, 0, true);
        probe.set_pixel(63, 127, true);
        probe.set_pixel(10, 70, true);
        let expected = flush_transactions(&probe);
        let frame: StdVec<u8> = probe.buffer().to_vec();
        probe.release().done();

        // 16 pages × (3 commands + 1 write), 64 data bytes per write.
        assert_eq!(expected.len(), 16 * 4);

        let mut display = configured(64, 128, expected);
        display.set_buffer(&frame).unwrap();
        display.display();
        display.release().done();
    }

    #[test]
    fn column_mode_flush_128x64() {
        let mut probe = configured(128, 64, StdVec::new());
        probe.set_pixel(0, 0, true);
        probe.set_pixel(127, 63, true);
        probe.set_pixel(20, 9, true);
        let expected = flush_transactions(&probe);
        let frame: StdVec<u8> = probe.buffer().to_vec();
        probe.release().done();

        // 128 columns × (3 commands + 1 write), 8 data bytes per write.
        assert_eq!(expected.len(), 128 * 4);

        let mut display = configured(128, 64, expected);
        display.set_buffer(&frame).unwrap();
        display.display();
        display.release().done();
    }

    #[test]
    fn column_mode_flush_addresses_high_columns() {
        let mut expected = StdVec::new();
        for col in 0..128u8 {
            expected.push(command(0xB0));
            expected.push(command(col & 0x0F));
            expected.push(command(0x10 | (col >> 4)));
            expected.push(data(&[0u8; 8]));
        }
        // Column 127 is addressed as low 0x0F, high 0x17.
        assert_eq!(127u8 & 0x0F, 0x0F);
        assert_eq!(0x10 | (127u8 >> 4), 0x17);

        let mut display = configured(128, 64, expected);
        display.display();
        display.release().done();
    }

    #[test]
    fn flush_transfers_whole_buffer() {
        for &(w, h) in &[(64u16, 128u16), (128, 64), (128, 128)] {
            let probe = configured(w, h, StdVec::new());
            let transfers = match probe.addressing_mode().unwrap() {
                AddressingMode::Page => h as usize / 8,
                AddressingMode::Column => w as usize,
            };
            let expected = flush_transactions(&probe);
            assert_eq!(expected.len(), transfers * 4);
            probe.release().done();

            // Running the real flush against the expected traffic proves the
            // whole buffer went out, one transfer per page or column.
            let mut display = configured(w, h, expected);
            display.display();
            display.release().done();
        }
    }

    #[test]
    fn flush_aborts_on_first_failure() {
        // Page 0 goes through, page 1's data write fails, nothing follows.
        let expected = std::vec![
            command(0xB0),
            command(0x00),
            command(0x10),
            data(&[0u8; 64]),
            command(0xB1),
            command(0x00),
            command(0x10),
            data(&[0u8; 64]).with_error(ErrorKind::Other),
        ];
        let mut display = configured(64, 128, expected);
        display.display();
        display.release().done();
    }

    #[test]
    fn clear_display_blanks_and_flushes() {
        let mut expected = StdVec::new();
        for page in 0..16u8 {
            expected.push(command(SET_PAGE_ADDR | page));
            expected.push(command(SET_COL_LO_ADDR));
            expected.push(command(SET_COL_HI_ADDR));
            expected.push(data(&[0u8; 64]));
        }
        let mut display = configured(64, 128, expected);
        display.set_pixel(5, 5, true);
        display.clear_display();
        assert!(!display.get_pixel(5, 5));
        display.release().done();
    }
}
