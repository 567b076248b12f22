//! [`Args`] definitions.

use clap::Parser;

/// Address book of properties and their buyers.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Lists only buyers desiring all of these `;`-separated
    /// characteristics.
    #[arg(long, value_name = "LIST")]
    pub characteristics: Option<String>,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}
