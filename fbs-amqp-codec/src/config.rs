use super::defines::{AMQP_DEFAULT_FRAME_MAX, AMQP_DEFAULT_MAX_TABLE_DEPTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Deepest table/array nesting accepted when decoding.
    pub max_table_depth: usize,
    /// Largest full frame accepted when encoding, 0 disables the check.
    pub frame_max: u32,
}

impl CodecConfig {
    pub fn new() -> Self {
        Self {
            max_table_depth: AMQP_DEFAULT_MAX_TABLE_DEPTH,
            frame_max: AMQP_DEFAULT_FRAME_MAX,
        }
    }

    pub fn max_table_depth(mut self, value: usize) -> Self {
        self.max_table_depth = value;
        self
    }

    pub fn frame_max(mut self, value: u32) -> Self {
        self.frame_max = value;
        self
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig::new()
    }
}
