mod image;
mod loader;

pub use image::MemoryImage;
pub use loader::{load, load_file, load_reader};

/// Word-addressed read access used by the slice encoder
pub trait WordSource {
    fn word_count(&self) -> usize;

    /// Reads one location; locations past the end read as zero
    fn read(&self, location: usize) -> u32;
}
