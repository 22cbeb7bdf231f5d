use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "dimsniff")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Read pixel dimensions from BMP and PNG headers", long_about = None)]
pub struct Cli {
    /// Image file to inspect
    pub image: Option<PathBuf>,

    /// Append the dimensions to this file, or to a generated file in this folder
    #[arg(short, long, conflicts_with = "auto")]
    pub output: Option<PathBuf>,

    /// Write the dimensions to a generated file next to the image
    #[arg(short, long)]
    pub auto: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,
}

/// What to do with a decoded size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteMode {
    Skip,
    BesideImage,
    To(PathBuf),
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.debug {
            Level::DEBUG
        } else if self.verbose {
            Level::INFO
        } else {
            Level::WARN
        }
    }

    pub fn write_mode(&self) -> WriteMode {
        match (&self.output, self.auto) {
            (Some(path), _) => WriteMode::To(path.clone()),
            (None, true) => WriteMode::BesideImage,
            (None, false) => WriteMode::Skip,
        }
    }
}
