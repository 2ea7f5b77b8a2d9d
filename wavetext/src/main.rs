// Copyright 2024-2025 Cornell University
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@cornell.edu>

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use wavetext::simple::{convert_file_with_options, convert_reader_with_options};
use wavetext::*;

#[derive(Parser, Debug)]
#[command(name = "wavetext")]
#[command(author = "Kevin Laeufer <laeufer@cornell.edu>")]
#[command(version)]
#[command(about = "Renders a WaveDrom JSON timing diagram as ASCII art.", long_about = None)]
struct Args {
    #[arg(value_name = "JSONFILE", index = 1, help = "use - to read from stdin")]
    filename: Option<PathBuf>,
    #[arg(short, long, value_name = "OUTPUT", help = "write to a file instead of stdout")]
    output: Option<PathBuf>,
    #[arg(long, default_value_t = DEFAULT_LABEL_WIDTH)]
    label_width: usize,
    #[arg(short, long, help = "print debug messages")]
    verbose: bool,
}

fn convert(filename: &Path, options: &RenderOptions) -> Result<String> {
    if filename == Path::new("-") {
        return convert_reader_with_options(std::io::stdin().lock(), options);
    }
    let is_json = filename
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if !is_json {
        log::warn!("{} does not have a .json extension", filename.display());
    }
    convert_file_with_options(filename, options)
}

fn run(args: &Args) -> Result<()> {
    let filename = args.filename.as_deref().ok_or(WavetextError::NoInput)?;
    let options = RenderOptions {
        label_width: args.label_width,
        ..Default::default()
    };
    // the output is only touched once the whole diagram was rendered
    let text = convert(filename, &options)?;
    match &args.output {
        Some(output) => std::fs::write(output, text)?,
        None => print!("{text}"),
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(WavetextError::NoInput) => {
            eprintln!("warning: no waveform file selected");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
