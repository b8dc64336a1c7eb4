use std::io::Write;

use bramgen_core::MemoryImage;

/// Writes the image as a Verilog memory hex dump: origin line, then one word per line
pub fn write_vmh<W: Write>(out: &mut W, image: &MemoryImage) -> std::io::Result<()> {
    writeln!(out, "@0")?;
    for word in image.words() {
        writeln!(out, "{:08x}", word)?;
    }
    Ok(())
}
