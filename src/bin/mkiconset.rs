use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use podcastready_icon::config::project_root;
use podcastready_icon::icon::generate_icon;
use podcastready_icon::iconset::write_iconset;
use podcastready_icon::IconError;

fn build(out_dir: PathBuf) -> Result<(), IconError> {
    // 1) Base sprite at 1024x1024
    let img = generate_icon(1024);

    // 2) Every iconset variant into a persistent directory
    fs::create_dir_all(&out_dir)?;
    let written = write_iconset(&img, &out_dir)?;

    println!("Iconset written to {} ({} files)", out_dir.display(), written.len());
    Ok(())
}

fn main() -> ExitCode {
    let base = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| project_root().join("assets"));

    match build(base.join("AppIcon.iconset")) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
