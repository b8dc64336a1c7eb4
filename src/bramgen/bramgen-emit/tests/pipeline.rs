use std::fs;

use tempfile::TempDir;

use bramgen_core::memory::{load, load_file};
use bramgen_core::{decode_location, BramError, MemoryImage, Organization, SliceEncoder};
use bramgen_emit::{generate, GeneratorConfig};

// Removed when the returned handle drops at the end of the test
fn scratch_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create scratch directory")
}

fn image_of_words(count: usize) -> Vec<u8> {
    (0..count as u32)
        .flat_map(|i| (i ^ 0xC0DE_0000).to_be_bytes().to_vec())
        .collect()
}

#[test]
fn test_generate_small_image() {
    let scratch = scratch_dir();
    let dir = scratch.path();
    let input = dir.join("code.bin");
    fs::write(&input, [0xDEu8, 0xAD, 0xBE, 0xEF]).unwrap();

    let image = load_file(&input).unwrap();
    let config = GeneratorConfig::new("code.bin", &dir.join("imem.v"));
    let report = generate(&config, &image).unwrap();

    assert_eq!(report.organization, Organization::Ramb16S9);
    assert_eq!(report.word_count, 1);
    assert_eq!(report.files.len(), 2);

    let verilog = fs::read_to_string(dir.join("imem.v")).unwrap();
    assert!(verilog.contains("  module imem(addra,clka,dina,douta,wea,addrb,clkb,dinb,doutb,web);\n"));
    assert!(verilog.contains("  // we're using 1 out of 2048 locations\n"));
    let first = format!("  defparam m0.INIT_00 = 256'b{}11101111;\n", "00000000_".repeat(31));
    assert!(verilog.contains(&first));
    let top = format!("  defparam m3.INIT_00 = 256'b{}11011110;\n", "00000000_".repeat(31));
    assert!(verilog.contains(&top));

    let vmh = fs::read_to_string(dir.join("imem.vmh")).unwrap();
    assert_eq!(vmh, "@0\ndeadbeef\n");
}

#[test]
fn test_parallel_output_is_identical() {
    let scratch = scratch_dir();
    let dir = scratch.path();
    let image = load(&image_of_words(5000));

    let sequential = GeneratorConfig::new("code.bin", &dir.join("seq.v"));
    let mut parallel = GeneratorConfig::new("code.bin", &dir.join("par.v"));
    parallel.module_name = "seq".to_string();
    parallel.jobs = 4;

    assert_eq!(generate(&sequential, &image).unwrap().organization, Organization::Ramb16S2);
    generate(&parallel, &image).unwrap();

    assert_eq!(
        fs::read(dir.join("seq.v")).unwrap(),
        fs::read(dir.join("par.v")).unwrap()
    );
}

#[test]
fn test_oversized_image_writes_nothing() {
    let scratch = scratch_dir();
    let dir = scratch.path();
    let image = load(&image_of_words(16385));
    let config = GeneratorConfig::new("big.bin", &dir.join("big.v"));

    match generate(&config, &image) {
        Err(BramError::CapacityExceeded { word_count, limit }) => {
            assert_eq!(word_count, 16385);
            assert_eq!(limit, 16384);
        }
        other => panic!("expected CapacityExceeded, got {:?}", other),
    }
    assert!(!dir.join("big.v").exists());
    assert!(!dir.join("big.vmh").exists());
}

#[test]
fn test_unwritable_output_reports_path() {
    let scratch = scratch_dir();
    let dir = scratch.path();
    let missing = dir.join("no-such-dir").join("out.v");
    let config = GeneratorConfig::new("code.bin", &missing);

    match generate(&config, &MemoryImage::default()) {
        Err(BramError::IoFailure { op, path, .. }) => {
            assert_eq!(op, "create");
            assert_eq!(path, missing);
        }
        other => panic!("expected IoFailure, got {:?}", other),
    }
}

#[test]
fn test_written_blocks_decode_to_image() {
    let scratch = scratch_dir();
    let dir = scratch.path();
    let bytes = image_of_words(2049);
    let image = load(&bytes);
    let config = GeneratorConfig::new("code.bin", &dir.join("mem.v"));
    generate(&config, &image).unwrap();

    // Pull the init strings back out of the emitted module
    let verilog = fs::read_to_string(dir.join("mem.v")).unwrap();
    let org = Organization::Ramb16S4;
    let mut blocks = vec![Vec::new(); org.fan_out()];
    for line in verilog.lines().filter(|l| l.starts_with("  defparam m")) {
        let instance: usize = line["  defparam m".len()..line.find('.').unwrap()].parse().unwrap();
        let digits: String = line[line.find("'b").unwrap() + 2..line.len() - 1]
            .chars()
            .filter(|&c| c != '_')
            .collect();
        let mut block = bramgen_core::InitBlock::new();
        block.push_str(&digits).unwrap();
        blocks[instance].push(block);
    }

    for (location, &word) in image.words().iter().enumerate() {
        assert_eq!(decode_location(org, &blocks, location), word);
    }
    assert_eq!(decode_location(org, &blocks, 4095), 0);

    // Blocks parsed from text match the encoder directly
    assert_eq!(blocks, SliceEncoder::new(org, &image).all_blocks());
}

#[test]
fn test_outputs_are_cleaned_up_with_scratch_dir() {
    let scratch = scratch_dir();
    let root = scratch.path().to_path_buf();
    let config = GeneratorConfig::new("code.bin", &root.join("mem.v"));
    generate(&config, &load(&[0x01, 0x02, 0x03, 0x04])).unwrap();
    assert!(root.join("mem.v").exists());
    assert!(root.join("mem.vmh").exists());

    drop(scratch);
    assert!(!root.exists());
}
