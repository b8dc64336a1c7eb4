extern crate clap;
use env_logger;
use log::{error, info};
use std::path::Path;

// Internal project modules
use bramgen_core::memory; // Image loading
use bramgen_core::{BramError, WordSource};
use bramgen_emit::GeneratorConfig; // Verilog and VMH writers

/// Configures command-line interface using clap
fn get_cli_config<'a>() -> clap::ArgMatches<'a> {
    let description = "Convert a big-endian binary image into block RAMs (up to 16k x 32 with byte writes)";
    clap::App::new("Block RAM Generator (bramgen)")
        .version("0.1")
        .about(description)
        .arg(
            clap::Arg::with_name("input")
                .help("Binary image, big-endian 32-bit words")
                .required(true)
                .index(1),
        )
        .arg(
            clap::Arg::with_name("output")
                .help("Verilog module to write")
                .required(true)
                .index(2),
        )
        .arg(
            clap::Arg::with_name("vmh")
                .long("vmh")
                .takes_value(true)
                .value_name("PATH")
                .help("Memory dump path (defaults to OUTPUT with a .vmh extension)"),
        )
        .arg(
            clap::Arg::with_name("module")
                .long("module")
                .takes_value(true)
                .value_name("NAME")
                .help("Verilog module name (defaults to the OUTPUT file stem)"),
        )
        .arg(
            clap::Arg::with_name("jobs")
                .short("j")
                .long("jobs")
                .takes_value(true)
                .value_name("N")
                .default_value("1")
                .validator(|v| match v.parse::<usize>() {
                    Ok(n) if n > 0 => Ok(()),
                    _ => Err(String::from("jobs must be a positive integer")),
                })
                .help("Worker threads used to build init strings"),
        )
        .get_matches()
}

/// Builds the run configuration from parsed arguments
fn build_config(matches: &clap::ArgMatches) -> GeneratorConfig {
    // Both positionals are required, clap rejects the run before we get here otherwise
    let input = matches.value_of("input").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();

    let mut config = GeneratorConfig::new(input, Path::new(output));
    if let Some(vmh) = matches.value_of("vmh") {
        config.vmh_path = vmh.into();
    }
    if let Some(name) = matches.value_of("module") {
        config.module_name = name.to_string();
    }
    config.jobs = matches
        .value_of("jobs")
        .and_then(|j| j.parse().ok())
        .unwrap_or(1);
    config
}

fn run(config: &GeneratorConfig) -> Result<(), BramError> {
    let image = memory::load_file(Path::new(&config.input_name))?;
    info!("Loaded {} words from {}", image.word_count(), config.input_name);

    let report = bramgen_emit::generate(config, &image)?;
    for file in &report.files {
        info!("Wrote {}", file.display());
    }
    Ok(())
}

/// Main entry point for the block RAM generator
fn main() {
    env_logger::init();

    // Parse command-line arguments
    let cli_matches = get_cli_config();
    let config = build_config(&cli_matches);

    if let Err(e) = run(&config) {
        error!("{}", e);
        std::process::exit(1);
    }
}
