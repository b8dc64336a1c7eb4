use core::fmt::Write;

use crate::constants::{INIT_ROWS, INIT_ROW_BITS, WORD_BITS};
use crate::memory::WordSource;
use crate::organization::Organization;
use crate::utils::{extract_field, insert_field, parse_binary};

/// Binary digits of one word field, most significant bit first
pub type BitSlice = heapless::String<WORD_BITS>;

/// One 256-digit init parameter of a block RAM instance
pub type InitBlock = heapless::String<INIT_ROW_BITS>;

/// Slices a memory image into per-instance init parameters
pub struct SliceEncoder<'a, S: WordSource> {
    org: Organization,
    source: &'a S,
}

impl<'a, S: WordSource> SliceEncoder<'a, S> {
    pub fn new(org: Organization, source: &'a S) -> Self {
        Self { org, source }
    }

    pub fn organization(&self) -> Organization {
        self.org
    }

    /// Binary form of the `width`-bit field at `bit_offset` in one location
    /// Locations past the end of the image read as zero; widths are clamped to 32
    pub fn bit_slice(&self, width: usize, bit_offset: usize, location: usize) -> BitSlice {
        let width = width.min(WORD_BITS);
        let word = if location >= self.source.word_count() {
            0
        } else {
            self.source.read(location)
        };
        let field = extract_field(word, bit_offset, width);

        let mut digits = BitSlice::new();
        let _ = write!(digits, "{:0width$b}", field, width = width);
        digits
    }

    /// Per-location slices of one init row, highest location first
    pub fn init_segments(&self, instance: usize, row: usize) -> Vec<BitSlice> {
        debug_assert!(instance < self.org.fan_out() && row < INIT_ROWS);
        let width = self.org.width();
        let (lo, _) = self.org.bit_range(instance);
        let per_row = self.org.locations_per_row();
        let start = row * per_row;

        // Hardware convention: highest address is the leftmost digit group
        (start..start + per_row)
            .rev()
            .map(|location| self.bit_slice(width, lo, location))
            .collect()
    }

    /// Init parameter `row` of block RAM `instance`
    pub fn init_block(&self, instance: usize, row: usize) -> InitBlock {
        let mut block = InitBlock::new();
        for segment in self.init_segments(instance, row).iter() {
            // Segments always add up to exactly INIT_ROW_BITS digits
            let _ = block.push_str(&segment);
        }
        block
    }

    /// All 64 init parameters of one instance, row 0 first
    pub fn instance_blocks(&self, instance: usize) -> Vec<InitBlock> {
        (0..INIT_ROWS)
            .map(|row| self.init_block(instance, row))
            .collect()
    }

    /// Init parameters of every instance, indexed `[instance][row]`
    pub fn all_blocks(&self) -> Vec<Vec<InitBlock>> {
        (0..self.org.fan_out())
            .map(|instance| self.instance_blocks(instance))
            .collect()
    }
}

/// Rebuilds the word at `location` from encoded `[instance][row]` blocks
/// Missing instances or rows contribute zero bits
pub fn decode_location(org: Organization, blocks: &[Vec<InitBlock>], location: usize) -> u32 {
    let width = org.width();
    let per_row = org.locations_per_row();
    let row = location / per_row;
    // Leftmost group holds the top location of the row
    let group = per_row - 1 - location % per_row;
    let digits = group * width..(group + 1) * width;

    (0..org.fan_out()).fold(0u32, |word, instance| {
        let field = blocks
            .get(instance)
            .and_then(|rows| rows.get(row))
            .and_then(|block| block.get(digits.clone()))
            .map(parse_binary)
            .unwrap_or(0);
        let (lo, _) = org.bit_range(instance);
        insert_field(word, lo, width, field)
    })
}
