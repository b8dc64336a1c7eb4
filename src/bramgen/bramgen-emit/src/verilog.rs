use std::fmt::Write as FmtWrite;
use std::io::Write;

use bramgen_core::constants::INIT_ROWS;
use bramgen_core::{InitBlock, MemoryImage, Organization, WordSource};

/// Module prologue: fixed 16K x 32 port list and a usage note
pub fn module_header(input_name: &str, module_name: &str, org: Organization, word_count: usize) -> String {
    format!(
        "// dual-port read/write memory initialized with {} code
  module {}(addra,clka,dina,douta,wea,addrb,clkb,dinb,doutb,web);
  input [13:0] addra,addrb;    // up to 16K locations
  input clka,clkb;             // memory has internal address regs
  input [31:0] dina,dinb;      // appears after rising clock edge
  output [31:0] douta,doutb;   // written at rising clock edge
  input wea,web;         // enables write port

  // we're using {} out of {} locations
",
        input_name,
        module_name,
        word_count,
        org.address_space()
    )
}

/// Both port connections of block RAM `instance`
/// Parity (byte-enable) inputs are only present on the byte-wide primitive and are tied low
pub fn instance_ports(org: Organization, instance: usize) -> String {
    let (lo, hi) = org.bit_range(instance);
    let msb = org.addr_width() - 1;
    let (parity_a, parity_b) = if org.parity_width() > 0 {
        (
            format!(".DIPA({}'h0),", org.parity_width()),
            format!(".DIPB({}'h0),", org.parity_width()),
        )
    } else {
        (String::new(), String::new())
    };

    let mut ports = String::new();
    let _ = writeln!(
        ports,
        "  {} m{}(.CLKA(clka),.ADDRA(addra[{}:0]),.DIA(dina[{}:{}]),{}.DOA(douta[{}:{}]),.WEA(wea),.ENA(1'b1),.SSRA(1'b0),",
        org.primitive(), instance, msb, hi, lo, parity_a, hi, lo
    );
    let _ = writeln!(
        ports,
        "             .CLKB(clkb),.ADDRB(addrb[{}:0]),.DIB(dinb[{}:{}]),{}.DOB(doutb[{}:{}]),.WEB(web),.ENB(1'b1),.SSRB(1'b0));",
        msb, hi, lo, parity_b, hi, lo
    );
    ports
}

/// One `defparam` line; digits are grouped per location with underscores
pub fn defparam_line(org: Organization, instance: usize, row: usize, block: &InitBlock) -> String {
    let width = org.width();
    let groups: Vec<&str> = (0..org.locations_per_row())
        .filter_map(|group| block.get(group * width..(group + 1) * width))
        .collect();
    format!(
        "  defparam m{}.INIT_{:02X} = 256'b{};\n",
        instance,
        row,
        groups.join("_")
    )
}

/// Writes the complete Verilog module for an image and its init blocks
pub fn write_module<W: Write>(
    out: &mut W,
    input_name: &str,
    module_name: &str,
    org: Organization,
    image: &MemoryImage,
    blocks: &[Vec<InitBlock>],
) -> std::io::Result<()> {
    out.write_all(module_header(input_name, module_name, org, image.word_count()).as_bytes())?;

    for (instance, rows) in blocks.iter().enumerate().take(org.fan_out()) {
        out.write_all(instance_ports(org, instance).as_bytes())?;
        for (row, block) in rows.iter().enumerate().take(INIT_ROWS) {
            out.write_all(defparam_line(org, instance, row, block).as_bytes())?;
        }
    }

    out.write_all(b"\nendmodule")?;
    Ok(())
}
