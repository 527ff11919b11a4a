/// Four byte-wide registers stepped once per draw. Cheap, deterministic and not remotely
/// cryptographic. A default-constructed generator starts from all zeros and always
/// produces the same stream.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ByteRng {
    a: u8,
    b: u8,
    c: u8,
    x: u8,
}

impl ByteRng {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(a: u8, b: u8, c: u8, x: u8) -> Self {
        ByteRng { a, b, c, x }
    }

    pub fn state(&self) -> [u8; 4] {
        [self.a, self.b, self.c, self.x]
    }

    pub fn next_byte(&mut self) -> u8 {
        self.x = self.x.wrapping_add(1);
        self.a ^= self.c ^ self.x;
        self.b = self.b.wrapping_add(self.a);
        self.c = self.c.wrapping_add(self.b >> 1) ^ self.a;
        self.c
    }

    /// Next byte reinterpreted as signed and divided by 256, so in [-0.5, 0.5).
    pub fn random_float(&mut self) -> f32 {
        (self.next_byte() as i8) as f32 / 256.0
    }
}
