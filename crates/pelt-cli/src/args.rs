//! Command-line argument definitions for the Pelt CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the output path, configuration file
//! selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Pelt pipeline diagram renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output SVG file
    #[arg(short, long, default_value = "pipeline.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["pelt"]);
        assert_eq!(args.output, "pipeline.svg");
        assert!(args.config.is_none());
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_short_flags() {
        let args = Args::parse_from(["pelt", "-o", "out/diagram.svg", "-c", "pelt.toml"]);
        assert_eq!(args.output, "out/diagram.svg");
        assert_eq!(args.config.as_deref(), Some("pelt.toml"));
    }
}
