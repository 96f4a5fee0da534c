//! Command-line interface wiring for the `cubestrip` binary.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cubestrip::convert::{DEFAULT_IMAGES_DIR, DEFAULT_INPUT};
use cubestrip::{ConvertOptions, GridLayout, convert};

pub mod logging;

/// Parsed CLI entrypoint. Every flag is optional; the defaults read
/// `algorithms.txt` and `images/` and write into the working directory.
#[derive(Parser, Debug)]
#[command(
    name = "cubestrip",
    version,
    about = "Render Rubik's Cube algorithms as tiled move pictures"
)]
pub struct Cli {
    /// Algorithms file, one algorithm per line.
    #[arg(long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,
    /// Directory holding `<move><modifier>.png` assets.
    #[arg(long, default_value = DEFAULT_IMAGES_DIR)]
    pub images: PathBuf,
    /// Directory receiving `combined_picture_<N>.png` files.
    #[arg(long = "output-dir", default_value = ".")]
    pub output_dir: PathBuf,
    /// Log resolution details.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn options(&self) -> ConvertOptions {
        ConvertOptions {
            input: self.input.clone(),
            images_dir: self.images.clone(),
            output_dir: self.output_dir.clone(),
            layout: GridLayout::default(),
        }
    }
}

/// Execute a conversion run.
pub fn run(cli: Cli) -> Result<()> {
    let summary = convert(&cli.options())?;
    if summary.failed.is_empty() {
        println!("Conversion completed successfully.");
    } else {
        println!(
            "Conversion completed: {} picture(s) saved, {} failed.",
            summary.written.len(),
            summary.failed.len()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_flagless_run() {
        let cli = Cli::parse_from(["cubestrip"]);
        let options = cli.options();
        assert_eq!(options.input, PathBuf::from("algorithms.txt"));
        assert_eq!(options.images_dir, PathBuf::from("images"));
        assert_eq!(options.output_dir, PathBuf::from("."));
        assert!(!cli.verbose);
    }

    #[test]
    fn flags_override_paths() {
        let cli = Cli::parse_from([
            "cubestrip",
            "--input",
            "oll.txt",
            "--images",
            "art",
            "--output-dir",
            "out",
            "-v",
        ]);
        let options = cli.options();
        assert_eq!(options.input, PathBuf::from("oll.txt"));
        assert_eq!(options.images_dir, PathBuf::from("art"));
        assert_eq!(options.output_dir, PathBuf::from("out"));
        assert!(cli.verbose);
    }
}
