use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use super::MemoryImage;
use crate::constants::BYTES_PER_WORD;
use crate::error::{BramError, Result};
use crate::utils::shift_in_byte;

/// Groups a raw byte stream into big-endian words
/// A trailing partial word is zero-padded in its low-order bytes
pub fn load(bytes: &[u8]) -> MemoryImage {
    let capacity = (bytes.len() + BYTES_PER_WORD - 1) / BYTES_PER_WORD;
    let (mut words, acc, pending) = bytes.iter().fold(
        (Vec::with_capacity(capacity), 0u32, 0usize),
        |(mut words, acc, pending), &byte| {
            let acc = shift_in_byte(acc, byte);
            if pending + 1 == BYTES_PER_WORD {
                words.push(acc);
                (words, 0, 0)
            } else {
                (words, acc, pending + 1)
            }
        },
    );

    if pending != 0 {
        let padded = (pending..BYTES_PER_WORD).fold(acc, |word, _| shift_in_byte(word, 0));
        words.push(padded);
    }

    debug!("Loaded {} bytes into {} words", bytes.len(), words.len());
    MemoryImage::from_words(words)
}

/// Reads a whole stream and loads it; `origin` names the stream in errors
pub fn load_reader<R: Read>(mut reader: R, origin: &Path) -> Result<MemoryImage> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| BramError::io("read", origin, e))?;
    Ok(load(&bytes))
}

/// Opens and loads a binary image file
pub fn load_file(path: &Path) -> Result<MemoryImage> {
    let file = File::open(path).map_err(|e| BramError::io("open", path, e))?;
    load_reader(file, path)
}
