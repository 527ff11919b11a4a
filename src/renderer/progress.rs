use std::fmt::{self, Write};

// "100% 4294967.2s" is the longest string the renderer can produce
const CAPACITY: usize = 24;

/// Stack-allocated progress line of the form `"NNN% SSS.Ts"`: percent of rows done and
/// elapsed seconds truncated to one decimal.
#[derive(Copy, Clone)]
pub struct ProgressText {
    buf: [u8; CAPACITY],
    len: usize,
}

impl ProgressText {
    pub fn new(percent: usize, elapsed_ms: u32) -> Self {
        let mut text = ProgressText {
            buf: [0; CAPACITY],
            len: 0,
        };
        // only fails on overflow, which the bounds above rule out
        let _ = write!(
            text,
            "{}% {}.{}s",
            percent,
            elapsed_ms / 1000,
            (elapsed_ms % 1000) / 100
        );
        text
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.buf[..self.len]).unwrap_or_default()
    }
}

impl Write for ProgressText {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if end > CAPACITY {
            return Err(fmt::Error);
        }
        self.buf[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

impl fmt::Debug for ProgressText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}
