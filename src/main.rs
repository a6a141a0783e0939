use std::ops::Range;

use clap::Parser;
use revcode::{Config, RevCodeError, RevCodec};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod args;
use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so codes on stdout stay pipeable.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run(cli: Cli) -> Result<(), RevCodeError> {
    let codec = RevCodec::new(load_config(&cli)?);

    match cli.command {
        Commands::Encode {
            store,
            sequence,
            wrap,
        } => handle_encode(&codec, store, sequence, wrap),
        Commands::Decode { codes } => handle_decode(&codec, &codes),
        Commands::Table { stores, sequences } => handle_table(&codec, stores, sequences),
        Commands::Info => handle_info(&codec),
    }
}

fn load_config(cli: &Cli) -> Result<Config, RevCodeError> {
    match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration file");
            Config::from_toml_file(path)
        }
        None => {
            debug!(preset = %cli.preset, "using preset configuration");
            Ok(Config::from_preset(cli.preset))
        }
    }
}

fn handle_encode(
    codec: &RevCodec,
    store: u64,
    sequence: u64,
    wrap: bool,
) -> Result<(), RevCodeError> {
    let code = if wrap {
        codec.encode(store, sequence)
    } else {
        codec.try_encode(store, sequence)?
    };
    println!("{}", code);
    Ok(())
}

fn handle_decode(codec: &RevCodec, codes: &[String]) -> Result<(), RevCodeError> {
    for code in codes {
        let (store, sequence) = codec.decode(code.trim())?;
        println!("{} => [ {} | {} ]", code.trim(), store, sequence);
    }
    Ok(())
}

fn handle_table(
    codec: &RevCodec,
    stores: Range<u64>,
    sequences: Range<u64>,
) -> Result<(), RevCodeError> {
    let mut mismatches = 0usize;
    for store in stores {
        for sequence in sequences.clone() {
            let code = codec.try_encode(store, sequence)?;
            let (decoded_store, decoded_sequence) = codec.decode(&code)?;
            println!(
                "{} => {} => [ {} | {} ]",
                sequence, code, decoded_store, decoded_sequence
            );
            if (decoded_store, decoded_sequence) != (store, sequence) {
                warn!(store, sequence, code = %code, "round trip mismatch");
                mismatches += 1;
            }
        }
    }
    if mismatches > 0 {
        return Err(RevCodeError::RoundTripMismatch { mismatches });
    }
    Ok(())
}

fn handle_info(codec: &RevCodec) -> Result<(), RevCodeError> {
    let config = codec.config();
    print!("{}", config.to_toml_string()?);
    println!("code_len = {}", config.code_len());
    println!("shift_index = {}", config.shift_index());
    println!("max_store = {}", config.max_store());
    println!("max_sequence = {}", config.max_sequence());
    Ok(())
}
