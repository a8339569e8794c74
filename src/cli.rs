use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "asylum")]
#[command(version = "1.0.0")]
#[command(about = "Advanced password list generator - Educational use only", long_about = None)]
pub struct Args {
    /// Minimum password length
    #[arg(long = "min", default_value_t = 8)]
    pub min: usize,

    /// Maximum password length
    #[arg(long = "max", default_value_t = 12)]
    pub max: usize,

    /// Use lowercase letters
    #[arg(short = 'l', long = "lowercase")]
    pub lowercase: bool,

    /// Use uppercase letters
    #[arg(short = 'u', long = "uppercase")]
    pub uppercase: bool,

    /// Use digits
    #[arg(short = 'd', long = "digits")]
    pub digits: bool,

    /// Use special characters
    #[arg(short = 's', long = "special")]
    pub special: bool,

    /// Custom characters appended to the character set
    #[arg(short = 'c', long = "custom", value_name = "CHARS")]
    pub custom: Option<String>,

    /// File with common words for the 'w' pattern token (one per line)
    #[arg(short = 'w', long = "words", value_name = "FILE")]
    pub words: Option<PathBuf>,

    /// Comma-separated password patterns (e.g. 'luds,llddss')
    ///
    /// Tokens: l=lowercase, u=uppercase, d=digit, s=special, w=word list.
    /// Any other token stands for the full character set.
    #[arg(short = 'p', long = "patterns", value_name = "PATTERNS")]
    pub patterns: Option<String>,

    /// Output file name
    #[arg(short = 'o', long = "output", default_value = "passwords.txt")]
    pub output: PathBuf,

    /// Expand every password into its smart-mutation variants
    #[arg(long)]
    pub smart: bool,

    /// Number of worker threads (default: CPU count)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Number of passwords computed per work chunk
    #[arg(long = "chunk-size", default_value_t = 1_000_000)]
    pub chunk_size: u64,
}
