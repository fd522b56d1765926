use std::process::ExitCode;

use podcastready_icon::helpers::format_file_size;
use podcastready_icon::logger::log_error;
use podcastready_icon::packager::SystemRunner;
use podcastready_icon::{run, GeneratorConfig, IconError};

fn main() -> ExitCode {
    let config = match GeneratorConfig::from_args(std::env::args().skip(1)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&config, &SystemRunner) {
        Ok(report) => {
            println!("Saved PNG: {}", report.reference_png.display());
            println!(
                "Saved ICNS: {} ({} variants, {})",
                report.icns.display(),
                report.variants,
                format_file_size(report.icns_bytes)
            );
            ExitCode::SUCCESS
        }
        Err(IconError::Packaging { program, stderr, .. }) => {
            eprintln!("{} error: {}", program, stderr);
            ExitCode::FAILURE
        }
        Err(e) => {
            log_error("Icon generation failed", &e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
