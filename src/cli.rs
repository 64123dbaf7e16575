use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

const USAGE: &str = "\
Usage: spotglow [OPTIONS]

Extracts Windows Spotlight lock-screen wallpapers into resolution-sorted
folders under ~/Pictures/WallPapers, skipping files from previous runs.

Options:
  --source=<dir>  Override the Spotlight asset cache directory
  --dest=<dir>    Override the destination root
  -h, --help      Print this help
  -V, --version   Print the version";

/// Overrides parsed from the command line; unset fields fall back to the
/// stock home-relative layout.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub source: Option<PathBuf>,
    pub dest: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CliError {
    Help,
    Version,
    InvalidFlag(String),
}

impl CliOptions {
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_iter(env::args().skip(1))
    }

    pub fn from_iter<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Self::default();
        for arg in args {
            if arg == "-h" || arg == "--help" {
                return Err(CliError::Help);
            }
            if arg == "-V" || arg == "--version" {
                return Err(CliError::Version);
            }
            if let Some(value) = arg.strip_prefix("--source=") {
                options.source = Some(PathBuf::from(value));
                continue;
            }
            if let Some(value) = arg.strip_prefix("--dest=") {
                options.dest = Some(PathBuf::from(value));
                continue;
            }
            return Err(CliError::InvalidFlag(arg));
        }
        Ok(options)
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Help => write!(f, "{}", USAGE),
            Self::Version => write!(f, "spotglow {}", env!("CARGO_PKG_VERSION")),
            Self::InvalidFlag(flag) => {
                write!(f, "unrecognized argument: {}\n\n{}", flag, USAGE)
            }
        }
    }
}

impl Error for CliError {}
