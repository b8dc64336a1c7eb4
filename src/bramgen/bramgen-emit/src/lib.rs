//! Output side of the block RAM generator: the Verilog module with its
//! `defparam` init strings and the plain `.vmh` memory dump.

pub mod verilog;
pub mod vmh;
pub mod workers;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use bramgen_core::{select, BramError, MemoryImage, Organization, Result, SliceEncoder, WordSource};

// Module name used when the output path has no usable file stem
pub const DEFAULT_MODULE_NAME: &str = "bram";

/// Settings for one generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub input_name: String,  // Image path as shown in the module comment
    pub module_name: String, // Verilog module name
    pub verilog_path: PathBuf,
    pub vmh_path: PathBuf,
    pub jobs: usize, // Worker threads for init block generation
}

impl GeneratorConfig {
    /// Derives module name and dump path from the Verilog output path
    pub fn new(input_name: &str, verilog_path: &Path) -> Self {
        let module_name = verilog_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .filter(|stem| !stem.is_empty())
            .unwrap_or_else(|| DEFAULT_MODULE_NAME.to_string());
        Self {
            input_name: input_name.to_string(),
            module_name,
            verilog_path: verilog_path.to_path_buf(),
            vmh_path: verilog_path.with_extension("vmh"),
            jobs: 1,
        }
    }
}

/// What a run produced
#[derive(Debug)]
pub struct GenerationReport {
    pub organization: Organization,
    pub word_count: usize,
    pub files: Vec<PathBuf>,
}

/// Selects an organization for the image and writes both output targets
///
/// Nothing is written when the image is too large. The Verilog module is
/// written first; a failure there stops the run before the dump is attempted.
pub fn generate(config: &GeneratorConfig, image: &MemoryImage) -> Result<GenerationReport> {
    let org = select(image.word_count())?;
    info!(
        "Using {} out of {} locations ({} x {})",
        image.word_count(),
        org.address_space(),
        org.fan_out(),
        org.primitive()
    );

    let encoder = SliceEncoder::new(org, image);
    let blocks = workers::generate_blocks(&encoder, config.jobs);

    write_target(&config.verilog_path, |out| {
        verilog::write_module(
            out,
            &config.input_name,
            &config.module_name,
            org,
            image,
            &blocks,
        )
    })?;
    write_target(&config.vmh_path, |out| vmh::write_vmh(out, image))?;

    Ok(GenerationReport {
        organization: org,
        word_count: image.word_count(),
        files: vec![config.verilog_path.clone(), config.vmh_path.clone()],
    })
}

// Creates one output file and streams its contents through a buffered writer
fn write_target<F>(path: &Path, body: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let file = File::create(path).map_err(|e| BramError::io("create", path, e))?;
    let mut out = BufWriter::new(file);
    body(&mut out).map_err(|e| BramError::io("write", path, e))?;
    out.flush().map_err(|e| BramError::io("write", path, e))?;
    debug!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_defaults_from_output_path() {
        let config = GeneratorConfig::new("build/code.bin", Path::new("build/imem.v"));
        assert_eq!(config.input_name, "build/code.bin");
        assert_eq!(config.module_name, "imem");
        assert_eq!(config.verilog_path, PathBuf::from("build/imem.v"));
        assert_eq!(config.vmh_path, PathBuf::from("build/imem.vmh"));
        assert_eq!(config.jobs, 1);
    }

    #[test]
    fn test_output_without_extension() {
        let config = GeneratorConfig::new("code.bin", Path::new("memory"));
        assert_eq!(config.module_name, "memory");
        assert_eq!(config.vmh_path, PathBuf::from("memory.vmh"));
    }

    #[test]
    fn test_output_without_stem_gets_default_name() {
        for path in ["", "..", "/"].iter() {
            let config = GeneratorConfig::new("code.bin", Path::new(path));
            assert_eq!(config.module_name, DEFAULT_MODULE_NAME, "path {:?}", path);
        }
    }
}
