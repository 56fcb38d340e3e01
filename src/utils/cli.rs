use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "manager-finder")]
#[command(about = "Find likely hiring managers for a job posting using AI + Google search", long_about = None)]
pub struct Args {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
    pub config: PathBuf,

    /// URL of the job posting (prompted for interactively when omitted)
    #[arg(short, long, value_name = "URL")]
    pub job_url: Option<String>,

    /// Access passcode (prompted for interactively when omitted)
    #[arg(short, long, value_name = "PASSCODE")]
    pub passcode: Option<String>,

    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,
}
