use super::{Screen, Vec2D};

/// In-memory framebuffer standing in for the display hardware.
#[derive(Clone, Debug)]
pub struct Film {
    pub pixels: Vec2D<[u8; 3]>,
    /// Last progress line written to the display.
    pub status: String,
    pub status_origin: (usize, usize),
}

impl Film {
    pub fn new(width: usize, height: usize) -> Film {
        Film {
            pixels: Vec2D::new(width, height, [0, 0, 0]),
            status: String::new(),
            status_origin: (0, 0),
        }
    }

    pub fn width(&self) -> usize {
        self.pixels.width
    }

    pub fn height(&self) -> usize {
        self.pixels.height
    }

    pub fn to_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            image::Rgb(self.pixels.at(x as usize, y as usize))
        })
    }
}

impl Screen for Film {
    fn draw_pixel(&mut self, x: usize, y: usize, r: u8, g: u8, b: u8) {
        // writes outside the buffer are the caller's problem, drop them
        if self.pixels.contains(x, y) {
            self.pixels.write_at(x, y, [r, g, b]);
        }
    }

    fn draw_text(&mut self, x: usize, y: usize, text: &str) {
        debug!("{}", text);
        self.status.clear();
        self.status.push_str(text);
        self.status_origin = (x, y);
    }
}
