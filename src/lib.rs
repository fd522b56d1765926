pub mod config;
pub mod design;
pub mod error;
pub mod helpers;
pub mod icon;
pub mod iconset;
pub mod logger;
pub mod packager;
pub mod pipeline;

pub use config::GeneratorConfig;
pub use design::IconDesign;
pub use error::IconError;
pub use pipeline::{run, RunReport};
