use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "ladle")]
#[command(about = "Build renderer-ready report models from an instrumentation run capture")]
#[command(version)]
pub struct CliArgs {
    /// Path to the run capture JSON produced by the device engine
    #[arg(value_name = "CAPTURE")]
    pub capture: PathBuf,

    /// Report output root; context files land here and artifact links resolve against it
    #[arg(long, short = 'o', default_value = "ladle-report", value_name = "DIR")]
    pub output: PathBuf,

    /// Also print the index context as JSON to stdout
    #[arg(long)]
    pub json: bool,

    /// Disable colored console output
    #[arg(long)]
    pub no_color: bool,

    /// Override the detected console width (for testing)
    #[arg(long, value_name = "COLS")]
    pub console_width: Option<usize>,
}

impl CliArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate argument combinations before doing any work
    pub fn validate(&self) -> Result<(), String> {
        if !self.capture.exists() {
            return Err(format!("Capture file not found: {}", self.capture.display()));
        }
        if self.capture.is_dir() {
            return Err(format!("Capture path is a directory: {}", self.capture.display()));
        }
        Ok(())
    }
}
