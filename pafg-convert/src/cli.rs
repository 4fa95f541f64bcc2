use std::path::PathBuf;

use clap::Parser;

pub const USAGE: &str = "Usage: pafg-convert <path_to_palo_alto_config.xml>";

#[derive(Parser, Debug)]
#[command(name = "pafg-convert", version)]
#[command(about = "Translate a Palo Alto configuration export into a FortiGate CLI script")]
#[command(
    long_about = "Translate a Palo Alto configuration export into a FortiGate CLI script.\n\nThe script is written to <hostname>.txt in the current directory, replacing any existing file of that name."
)]
pub struct Cli {
    /// PAN-OS XML configuration export.
    #[arg(allow_hyphen_values = true)]
    pub input: PathBuf,
}
