//=========================================================================
// Display
//=========================================================================
//
// The surface game states render into.
//
// A double-buffered framebuffer of 32-bit ARGB pixels. States draw into
// the back buffer during `render`; the controller calls `flip()` at the
// end of the frame to make it the front buffer.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;

//=== Color ===============================================================

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque black. The clear color between frames.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Packs into `0xAARRGGBB`.
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Unpacks from `0xAARRGGBB`.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }
}

//=== Display =============================================================

/// Double-buffered render target.
#[derive(Debug, Clone)]
pub struct Display {
    width: u32,
    height: u32,
    back: Vec<u32>,
    front: Vec<u32>,
    frames_presented: u64,
}

impl Display {
    //--- Construction -----------------------------------------------------

    /// Creates a black display of `width × height` pixels.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        let black = Color::BLACK.to_argb();

        Self {
            width,
            height,
            back: vec![black; len],
            front: vec![black; len],
            frames_presented: 0,
        }
    }

    //--- Drawing ----------------------------------------------------------

    /// Fills the back buffer with `color`.
    pub fn fill(&mut self, color: Color) {
        self.back.fill(color.to_argb());
    }

    /// Sets one back-buffer pixel. Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(index) = self.index(x, y) {
            self.back[index] = color.to_argb();
        }
    }

    /// Reads one back-buffer pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.index(x, y).map(|i| Color::from_argb(self.back[i]))
    }

    //--- Presentation -----------------------------------------------------

    /// Presents the back buffer and returns the number of presented frames.
    ///
    /// After the swap the back buffer holds the previous front frame, so
    /// callers clear it before drawing the next one.
    pub fn flip(&mut self) -> u64 {
        std::mem::swap(&mut self.back, &mut self.front);
        self.frames_presented += 1;
        trace!("Display flipped (frame {})", self.frames_presented);
        self.frames_presented
    }

    /// Pixels of the last presented frame, row-major ARGB.
    pub fn front_buffer(&self) -> &[u32] {
        &self.front
    }

    //--- Queries ----------------------------------------------------------

    /// `(width, height)` in pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_packing() {
        let color = Color::rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!(color.to_argb(), 0x7812_3456);
        assert_eq!(Color::from_argb(0x7812_3456), color);
        assert_eq!(Color::BLACK.to_argb(), 0xFF00_0000);
    }

    #[test]
    fn new_display_is_black() {
        let display = Display::new(4, 3);
        assert_eq!(display.size(), (4, 3));
        assert_eq!(display.pixel(3, 2), Some(Color::BLACK));
        assert_eq!(display.front_buffer().len(), 12);
    }

    #[test]
    fn fill_covers_every_pixel() {
        let mut display = Display::new(2, 2);
        display.fill(Color::WHITE);

        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(display.pixel(x, y), Some(Color::WHITE));
            }
        }
    }

    #[test]
    fn out_of_bounds_access_is_ignored() {
        let mut display = Display::new(2, 2);
        display.set_pixel(2, 0, Color::WHITE);
        display.set_pixel(0, 5, Color::WHITE);

        assert_eq!(display.pixel(2, 0), None);
        assert_eq!(display.pixel(0, 0), Some(Color::BLACK));
    }

    #[test]
    fn flip_presents_back_buffer() {
        let mut display = Display::new(1, 1);
        display.set_pixel(0, 0, Color::WHITE);

        assert_eq!(display.flip(), 1);
        assert_eq!(display.front_buffer(), &[Color::WHITE.to_argb()]);
        assert_eq!(display.pixel(0, 0), Some(Color::BLACK), "back buffer now holds old front");
        assert_eq!(display.frames_presented(), 1);
    }
}
