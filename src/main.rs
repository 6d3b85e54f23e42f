extern crate baucalc;

use baucalc::output::FileOutput;
use baucalc::run_project;
use clap::Parser;
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Parser, Default, Debug)]
#[clap(author, version, about, long_about = None)]
struct CalcArgs {
    /// JSON document containing the 32 load-calculation parameters
    input_file: String,
    /// Directory to write the results file into (defaults to the input file's
    /// directory)
    #[arg(long, short)]
    output_directory: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = CalcArgs::parse();

    let input_file = args.input_file.as_str();
    let input_file_ext = Path::new(input_file).extension().and_then(OsStr::to_str);
    let input_file_stem = match input_file_ext {
        Some(ext) => &input_file[..(input_file.len() - ext.len() - 1)],
        None => input_file,
    };
    let output_directory = args.output_directory.unwrap_or_else(|| {
        Path::new(input_file)
            .parent()
            .unwrap_or(Path::new("."))
            .to_path_buf()
    });
    let file_stem = Path::new(input_file_stem)
        .file_name()
        .and_then(OsStr::to_str)
        .unwrap_or(input_file_stem)
        .to_string();

    let input = BufReader::new(File::open(input_file)?);
    let output = FileOutput::new(output_directory, file_stem);

    let result = run_project(input, output)?;

    println!("Results - Heating load");
    println!("Total heating load: {} W", result.phi_hl.round());
    println!();
    println!("Results - Cooling load");
    println!("Total cooling load: {} W", result.phi_cl.round());
    println!("Total cooling load July: {} W", result.phi_cl_july.round());
    println!(
        "Total cooling load September: {} W",
        result.phi_cl_sept.round()
    );

    Ok(())
}
