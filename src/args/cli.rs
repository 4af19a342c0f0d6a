use clap::{Args, Parser, Subcommand};

use super::defaults::{DEFAULT_DELAY_MS, DEFAULT_TIMEOUT_SECS, DEFAULT_VUS};

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "toad",
    version,
    about = "Load testing tool: repeated HTTP calls from concurrent virtual users for a fixed duration."
)]
pub struct ToadArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Path to config file (TOML or JSON); defaults to ./toad.toml or ./toad.json
    #[arg(long, global = true, env = "TOAD_CONFIG")]
    pub config: Option<String>,

    /// Enable debug-level logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// HTTP GET calls to service
    #[command(after_help = "Ex. 'toad get --url=localhost:8080/health --delay=100 --vus=1 --duration=10'")]
    Get(GetArgs),
    /// HTTP POST calls to service
    #[command(
        after_help = "Ex. 'toad post --url=localhost:8080/something --delay=100 --vus=1 --duration=10 --body=\"{}\"'"
    )]
    Post(PostArgs),
}

impl Command {
    #[must_use]
    pub const fn load(&self) -> &LoadArgs {
        match self {
            Command::Get(args) => &args.load,
            Command::Post(args) => &args.load,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Command::Get(_) => "get",
            Command::Post(_) => "post",
        }
    }
}

/// Flags shared by every HTTP method.
#[derive(Debug, Args, Clone)]
pub struct LoadArgs {
    /// URL of service to hit
    #[arg(long, short)]
    pub url: Option<String>,

    /// Headers of call as 'key:value' pairs separated by ','
    #[arg(long = "headers", short = 'H', default_value = "")]
    pub headers: String,

    /// Number of virtual users
    #[arg(long, default_value_t = DEFAULT_VUS)]
    pub vus: usize,

    /// Millisecond delay between http calls
    #[arg(long, short, default_value_t = DEFAULT_DELAY_MS)]
    pub delay: u64,

    /// Timeout for single http call in seconds (0 disables it)
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Duration of the test in seconds
    #[arg(long, short = 't')]
    pub duration: Option<u64>,

    /// Print http response status code and response body
    #[arg(long)]
    pub debug: bool,
}

#[derive(Debug, Args, Clone)]
pub struct GetArgs {
    #[command(flatten)]
    pub load: LoadArgs,
}

#[derive(Debug, Args, Clone)]
pub struct PostArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// JSON body sent with every call
    #[arg(long, short)]
    pub body: Option<String>,
}
