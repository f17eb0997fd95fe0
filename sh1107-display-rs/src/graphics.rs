//! `embedded-graphics` integration.
//!
//! Implements [`DrawTarget`] and [`OriginDimensions`] for [`Sh1107`] so any
//! drawable (text from a third-party font crate, primitives, images) can be
//! rendered straight into the framebuffer. Every pixel goes through
//! [`Sh1107::set_pixel`], which means off-panel pixels are clipped for free
//! and the active addressing mode is always respected.

use core::convert::Infallible;

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
    Pixel,
};
use embedded_hal::i2c::I2c;

use crate::driver::Sh1107;

impl<I2C> OriginDimensions for Sh1107<I2C>
where
    I2C: I2c,
{
    fn size(&self) -> Size {
        let (width, height) = self.dimensions();
        Size::new(u32::from(width), u32::from(height))
    }
}

impl<I2C> DrawTarget for Sh1107<I2C>
where
    I2C: I2c,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<P>(&mut self, pixels: P) -> Result<(), Self::Error>
    where
        P: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        match color {
            BinaryColor::Off => self.fill(0x00),
            BinaryColor::On => self.fill(0xFF),
        }
        Ok(())
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::driver::init_sequence;
    use crate::geometry::Dimensions;
    use crate::registers::{COMMAND_PREFIX, DEFAULT_ADDRESS};
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
    use std::vec::Vec as StdVec;

    fn configured(width: u16, height: u16) -> Sh1107<I2cMock> {
        let dims = Dimensions::from_size(width, height).unwrap();
        let expected: StdVec<I2cTransaction> = init_sequence(dims, false)
            .iter()
            .map(|&b| I2cTransaction::write(DEFAULT_ADDRESS, std::vec![COMMAND_PREFIX, b]))
            .collect();
        let mut display = Sh1107::new(I2cMock::new(&expected), DEFAULT_ADDRESS, width, height, false);
        display.configure().unwrap();
        display
    }

    #[test]
    fn size_reports_panel_dimensions() {
        let display = configured(64, 128);
        assert_eq!(OriginDimensions::size(&display), Size::new(64, 128));
        display.release().done();
    }

    #[test]
    fn draw_iter_sets_and_clears_pixels() {
        let mut display = configured(128, 64);
        display
            .draw_iter([
                Pixel(Point::new(3, 4), BinaryColor::On),
                Pixel(Point::new(100, 60), BinaryColor::On),
                Pixel(Point::new(3, 4), BinaryColor::Off),
            ])
            .unwrap();

        assert!(!display.get_pixel(3, 4));
        assert!(display.get_pixel(100, 60));
        display.release().done();
    }

    #[test]
    fn off_panel_pixels_are_clipped() {
        let mut display = configured(64, 128);
        Line::new(Point::new(-10, 0), Point::new(200, 0))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut display)
            .unwrap();

        for x in 0..64 {
            assert!(display.get_pixel(x, 0));
        }
        assert!(!display.get_pixel(0, 1));
        display.release().done();
    }

    #[test]
    fn filled_rectangle_in_column_mode() {
        let mut display = configured(128, 64);
        Rectangle::new(Point::new(8, 8), Size::new(4, 8))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut display)
            .unwrap();

        // Columns 8..12, rows 8..16 → byte 1 of each column is fully lit.
        for col in 8..12 {
            assert_eq!(display.buffer()[col * 8 + 1], 0xFF);
        }
        assert_eq!(display.buffer().iter().filter(|&&b| b != 0).count(), 4);
        display.release().done();
    }

    #[test]
    fn clear_fills_whole_buffer() {
        let mut display = configured(128, 128);
        display.clear(BinaryColor::On).unwrap();
        assert!(display.buffer().iter().all(|&b| b == 0xFF));
        display.clear(BinaryColor::Off).unwrap();
        assert!(display.buffer().iter().all(|&b| b == 0x00));
        display.release().done();
    }
}
