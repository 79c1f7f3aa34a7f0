pub mod build;
pub mod completions;

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::config::Config;
use crate::error::Result;

/// maze - Twine passage generator for image-map mazes
#[derive(Parser, Debug)]
#[command(name = "maze")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Maze document (YAML, or JSON with a .json extension)
    #[arg(value_name = "CONFIGFILE", required_unless_present = "completions")]
    pub document: Option<PathBuf>,

    /// Output directory [default: mazerooms]
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Image directory referenced by the generated passages [default: images]
    #[arg(long)]
    pub image_dir: Option<String>,

    /// YAML file with render settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Validate the document without writing any files
    #[arg(long)]
    pub check: bool,

    /// Suppress status output
    #[arg(long, short)]
    pub quiet: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, exclusive = true)]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Defaults, then the config file, then command-line flags.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(output) = &self.output {
            config = config.with_output(output);
        }
        if let Some(image_dir) = &self.image_dir {
            config = config.with_image_dir(image_dir);
        }

        Ok(config)
    }
}
