use super::{Screen, Vec2D};
use crate::rgb_to_u32;

use minifb::{Key, Scale, Window, WindowOptions};

/// Live window that fills in as the frame renders. The window is redrawn once per row,
/// when the progress line for that row arrives.
pub struct PreviewWindow {
    window: Window,
    buffer: Vec2D<u32>,
}

impl PreviewWindow {
    pub fn new(width: usize, height: usize) -> anyhow::Result<Self> {
        let mut window = Window::new(
            "Preview",
            width,
            height,
            WindowOptions {
                scale: Scale::X2,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| anyhow::anyhow!("failed to open preview window: {}", e))?;
        // Limit to max ~60 fps update rate
        window.set_target_fps(60);
        Ok(PreviewWindow {
            window,
            buffer: Vec2D::new(width, height, 0u32),
        })
    }

    fn present(&mut self) {
        if let Err(e) =
            self.window
                .update_with_buffer(&self.buffer.buffer, self.buffer.width, self.buffer.height)
        {
            warn!("failed to update preview window: {}", e);
        }
    }

    /// Keep showing the finished frame until the window is closed or escape is pressed.
    pub fn wait_for_close(&mut self) {
        while self.window.is_open() && !self.window.is_key_down(Key::Escape) {
            self.present();
        }
    }
}

impl Screen for PreviewWindow {
    fn draw_pixel(&mut self, x: usize, y: usize, r: u8, g: u8, b: u8) {
        if self.buffer.contains(x, y) {
            self.buffer.write_at(x, y, rgb_to_u32(r, g, b));
        }
    }

    fn draw_text(&mut self, _x: usize, _y: usize, text: &str) {
        self.window.set_title(&format!("Preview {}", text));
        self.present();
    }
}
