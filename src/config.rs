use std::path::{Path, PathBuf};

use crate::design::IconDesign;
use crate::error::IconError;
use crate::packager::DEFAULT_PACKAGER;

pub const MASTER_SIZE: u32 = 1024;

/// Project root, resolved from the utility's own location.
pub fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn default_output() -> PathBuf {
    project_root()
        .join("PodcastReady")
        .join("Resources")
        .join("AppIcon.icns")
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub master_size: u32,
    pub output_icns: PathBuf,
    pub packager_program: String,
    pub design: IconDesign,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            master_size: MASTER_SIZE,
            output_icns: default_output(),
            packager_program: DEFAULT_PACKAGER.to_string(),
            design: IconDesign::default(),
        }
    }
}

impl GeneratorConfig {
    /// Defaults, with an optional positional output path (`genicon [OUTPUT.icns]`).
    pub fn from_args<I>(args: I) -> Result<Self, IconError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut cfg = Self::default();
        let mut args = args.into_iter();
        if let Some(out) = args.next() {
            cfg.output_icns = PathBuf::from(out);
        }
        if let Some(extra) = args.next() {
            return Err(IconError::Usage(format!(
                "unexpected argument '{}'; expected: genicon [OUTPUT.icns]",
                extra
            )));
        }
        Ok(cfg)
    }

    pub fn with_output(mut self, output: impl AsRef<Path>) -> Self {
        self.output_icns = output.as_ref().to_path_buf();
        self
    }

    /// Reference PNG next to the container, same stem.
    pub fn reference_png(&self) -> PathBuf {
        self.output_icns.with_extension("png")
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_icns.parent().filter(|p| !p.as_os_str().is_empty())
    }
}
