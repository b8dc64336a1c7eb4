pub mod constants;
pub mod encoder;
pub mod error;
pub mod memory;
pub mod organization;
pub mod utils;

pub use encoder::{decode_location, BitSlice, InitBlock, SliceEncoder};
pub use error::{BramError, Result};
pub use memory::{MemoryImage, WordSource};
pub use organization::{select, Organization};
