use favicons_core::Config;
use std::path::PathBuf;

/// Generates the PNG favicon variants for the website's static assets.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub struct Cli {
    /// Sets a configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Sets the source image [default: dist/images/favicon.png]
    #[arg(long, value_name = "FILE")]
    pub source: Option<PathBuf>,

    /// Sets the destination directory [default: public/images]
    #[arg(long, value_name = "DIR")]
    pub dest_dir: Option<PathBuf>,

    /// Shows the files that would be written instead of writing them
    #[arg(long)]
    pub plan: bool,

    /// Enables debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Layers the command-line overrides on top of `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(source) = &self.source {
            config.source = source.clone();
        }
        if let Some(dest_dir) = &self.dest_dir {
            config.dest_dir = dest_dir.clone();
        }
        config
    }
}
