use std::fs;
use std::path::PathBuf;

use crate::config::GeneratorConfig;
use crate::error::IconError;
use crate::icon::render_icon;
use crate::iconset::stage_iconset;
use crate::logger::{log_error, log_line};
use crate::packager::{CommandRunner, Packager};

#[derive(Debug, Clone)]
pub struct RunReport {
    pub reference_png: PathBuf,
    pub icns: PathBuf,
    pub variants: usize,
    pub icns_bytes: u64,
}

/// Render, export, package and clean up.
///
/// The scratch iconset is removed once packaging has run, whether it succeeded
/// or not; a packaging error is returned after cleanup.
pub fn run(config: &GeneratorConfig, runner: &dyn CommandRunner) -> Result<RunReport, IconError> {
    log_line("Generating PodcastReady app icon...");

    let master = render_icon(config.master_size, &config.design);

    if let Some(dir) = config.output_dir() {
        fs::create_dir_all(dir)?;
    }
    let png_path = config.reference_png();
    master
        .save(&png_path)
        .map_err(|source| IconError::WriteImage { path: png_path.clone(), source })?;
    log_line(&format!("Saved PNG: {}", png_path.display()));

    let iconset = stage_iconset(&master)?;
    let variants = iconset.files().len();
    log_line(&format!("Created iconset: {}", iconset.path().display()));

    let packaged = Packager::new(config.packager_program.as_str()).package(
        runner,
        iconset.path(),
        &config.output_icns,
    );
    if let Err(e) = iconset.close() {
        log_error("Failed to remove iconset", &e);
    }
    packaged?;
    log_line(&format!("Saved ICNS: {}", config.output_icns.display()));

    let icns_bytes = fs::metadata(&config.output_icns)?.len();
    log_line("Done.");
    Ok(RunReport {
        reference_png: png_path,
        icns: config.output_icns.clone(),
        variants,
        icns_bytes,
    })
}
