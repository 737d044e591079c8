use clap::Parser;
use flaimapper::{cli, commands};

fn main() {
    let args = cli::Args::parse();

    let mut logger = pretty_env_logger::formatted_builder();
    logger.filter_level(args.log_level());
    if let Ok(filters) = std::env::var("RUST_LOG") {
        logger.parse_filters(&filters);
    }
    logger.init();

    let result = match args.command {
        cli::Commands::Export(export_args) => commands::export::run(export_args),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
