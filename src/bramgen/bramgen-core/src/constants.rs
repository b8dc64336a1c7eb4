// Width of a memory image word and the bytes that make it up
pub const WORD_BITS: usize = 32;
pub const BYTES_PER_WORD: usize = 4;

// Every block RAM carries 64 init parameters of 256 bits each
pub const INIT_ROWS: usize = 64;
pub const INIT_ROW_BITS: usize = 256;

// Largest image any supported organization can hold (16K x 32)
pub const MAX_LOCATIONS: usize = 16384;

pub mod primitives {
    // Dual-port block RAM primitive names, one per port width
    pub const RAMB16_S9_S9: &str = "RAMB16_S9_S9";
    pub const RAMB16_S4_S4: &str = "RAMB16_S4_S4";
    pub const RAMB16_S2_S2: &str = "RAMB16_S2_S2";
    pub const RAMB16_S1_S1: &str = "RAMB16_S1_S1";
}
