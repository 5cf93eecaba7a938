use clap::{ArgAction, Args};

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Suppress informational notices
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Maximum input size in bytes (0 = unlimited)
    #[arg(long, global = true, default_value = "104857600")]
    pub max_size: usize,

    /// Process input exceeding --max-size limit
    #[arg(long, global = true)]
    pub force: bool,

    /// Extra config file applied on top of the standard locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// More diagnostics on stderr (-v debug, -vv trace)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl GlobalArgs {
    /// Whether stderr output should carry ANSI color.
    pub fn use_color(&self) -> bool {
        !self.no_color && decipher::should_use_color()
    }

    /// Default tracing filter for these flags.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
