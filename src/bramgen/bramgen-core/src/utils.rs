use crate::constants::WORD_BITS;

// Mask covering the low `width` bits of a word
pub fn field_mask(width: usize) -> u32 {
    if width >= WORD_BITS {
        u32::MAX
    } else {
        (1u32 << width) - 1
    }
}

// Pulls the `width`-bit field starting at `bit_offset` out of a word
pub fn extract_field(word: u32, bit_offset: usize, width: usize) -> u32 {
    word.checked_shr(bit_offset as u32).unwrap_or(0) & field_mask(width)
}

// Places `value` into the `width`-bit field at `bit_offset`, leaving other bits alone
pub fn insert_field(word: u32, bit_offset: usize, width: usize, value: u32) -> u32 {
    if bit_offset >= WORD_BITS {
        return word;
    }
    let mask = field_mask(width) << bit_offset;
    (word & !mask) | ((value << bit_offset) & mask)
}

// Big-endian accumulation: the top byte falls off, the new byte lands at the bottom
pub fn shift_in_byte(acc: u32, byte: u8) -> u32 {
    ((acc & 0x00FF_FFFF) << 8) | byte as u32
}

// Reads a string of '0'/'1' digits as an unsigned value (MSB first)
pub fn parse_binary(digits: &str) -> u32 {
    digits
        .bytes()
        .fold(0u32, |acc, d| (acc << 1) | (d == b'1') as u32)
}
