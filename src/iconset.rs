//! Export of the master raster into a macOS `.iconset` directory.
//!
//! Each pixel size in [`ICONSET_SIZES`] is resized once (Lanczos3) and written
//! as a standard variant when it is at most [`MAX_STANDARD_SIZE`], and as the
//! `@2x` variant of half its size when it is at least [`MIN_RETINA_SIZE`].

use std::io;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::RgbaImage;
use tempfile::TempDir;

use crate::error::IconError;
use crate::logger::log_line;

pub const ICONSET_SIZES: [u32; 7] = [16, 32, 64, 128, 256, 512, 1024];
pub const MAX_STANDARD_SIZE: u32 = 512;
pub const MIN_RETINA_SIZE: u32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Density {
    Standard,
    Retina,
}

/// One file of the iconset: its real pixel edge length and density class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeVariant {
    pub pixels: u32,
    pub density: Density,
}

impl SizeVariant {
    /// Logical size encoded in the file name.
    pub fn nominal(&self) -> u32 {
        match self.density {
            Density::Standard => self.pixels,
            Density::Retina => self.pixels / 2,
        }
    }

    pub fn file_name(&self) -> String {
        let n = self.nominal();
        match self.density {
            Density::Standard => format!("icon_{}x{}.png", n, n),
            Density::Retina => format!("icon_{}x{}@2x.png", n, n),
        }
    }
}

/// Variants produced for a single pixel size.
pub fn variants_for(pixels: u32) -> Vec<SizeVariant> {
    let mut out = Vec::with_capacity(2);
    if pixels <= MAX_STANDARD_SIZE {
        out.push(SizeVariant { pixels, density: Density::Standard });
    }
    if pixels >= MIN_RETINA_SIZE {
        out.push(SizeVariant { pixels, density: Density::Retina });
    }
    out
}

/// Every variant of the iconset, in export order.
pub fn variants() -> Vec<SizeVariant> {
    ICONSET_SIZES.iter().flat_map(|&s| variants_for(s)).collect()
}

/// Resize `master` to `size`, copying it unchanged when no resampling is needed.
pub fn resize_master(master: &RgbaImage, size: u32) -> RgbaImage {
    if master.dimensions() == (size, size) {
        master.clone()
    } else {
        imageops::resize(master, size, size, FilterType::Lanczos3)
    }
}

/// Write every variant of `master` into the existing directory `dir`.
pub fn write_iconset(master: &RgbaImage, dir: &Path) -> Result<Vec<PathBuf>, IconError> {
    let mut written = Vec::new();
    for &size in ICONSET_SIZES.iter() {
        let resized = resize_master(master, size);
        for variant in variants_for(size) {
            let path = dir.join(variant.file_name());
            resized
                .save(&path)
                .map_err(|source| IconError::WriteImage { path: path.clone(), source })?;
            written.push(path);
        }
    }
    Ok(written)
}

/// A populated scratch `.iconset` directory, removed when dropped.
#[derive(Debug)]
pub struct StagedIconset {
    dir: TempDir,
    files: Vec<PathBuf>,
}

impl StagedIconset {
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Remove the scratch directory now, reporting any failure.
    pub fn close(self) -> io::Result<()> {
        let path = self.dir.path().to_path_buf();
        self.dir.close()?;
        log_line(&format!("Removed iconset {}", path.display()));
        Ok(())
    }
}

/// Export `master` into a fresh, uniquely named scratch `.iconset` directory.
///
/// The directory name must end in `.iconset` for `iconutil` to accept it. If any
/// write fails the partially populated directory is removed before returning.
pub fn stage_iconset(master: &RgbaImage) -> Result<StagedIconset, IconError> {
    let dir = tempfile::Builder::new()
        .prefix("AppIcon-")
        .suffix(".iconset")
        .tempdir()?;
    let files = write_iconset(master, dir.path())?;
    Ok(StagedIconset { dir, files })
}
