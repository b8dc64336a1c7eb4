use super::WordSource;

/// Memory image as an ordered list of big-endian 32-bit words
/// Built once by the loader and never modified afterwards
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryImage {
    words: Vec<u32>,
}

impl MemoryImage {
    pub fn from_words(words: Vec<u32>) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &[u32] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for MemoryImage {
    fn word_count(&self) -> usize {
        self.words.len()
    }

    fn read(&self, location: usize) -> u32 {
        // Unused address space is zero-filled
        self.words.get(location).copied().unwrap_or(0)
    }
}
