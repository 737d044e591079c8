use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export annotated fragments to a tabular, GenBank or GTF file
    Export(ExportArgs),
}

#[derive(ClapArgs, Debug)]
pub struct ExportArgs {
    /// JSON file with one result object per precursor (may be gzip/bzip2/xz compressed)
    pub input: PathBuf,

    /// Output file, or prefix for GenBank; "-" writes to stdout
    #[arg(short = 'o', long = "output", default_value = "-")]
    pub output: String,

    /// Output format: 1 = tab-delimited per fragment, 2 = tab-delimited per ncRNA, 3 = GenBank, 4 = GTF
    #[arg(short = 'f', long = "format", default_value = "1")]
    pub format: u8,

    /// Indexed reference FASTA (with .fai) used to fill in fragment sequences
    #[arg(short = 'r', long = "fasta")]
    pub fasta: Option<PathBuf>,

    /// Config file; defaults to config.toml in the user config directory
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
