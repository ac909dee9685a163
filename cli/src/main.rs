use clap::{Parser, Subcommand};
use rhopi_keccak_offsets::generate_round_offsets_with;
use tracing::{info, warn};
use tracing_forest::ForestLayer;
use tracing_forest::util::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::error::CliError;
use crate::parsers::{Bits, PiOptions, parse_bits};
use crate::report::{build_vector, offsets_report};

mod error;
mod parsers;
mod report;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the read offsets, write offsets and rotation amounts for one rho/pi pass.
    Offsets {
        /// The pi remapping used to compute write offsets.
        #[arg(short, long, ignore_case = true, value_enum, default_value_t = PiOptions::Gather)]
        pi: PiOptions,
    },
    /// Print a pad10*1 test vector as JSON.
    PadVector {
        /// The message bits, e.g. `1011`. They fill the start of the input buffer.
        #[arg(short, long, value_parser = parse_bits)]
        message: Option<Bits>,

        /// Capacity of the input buffer.
        #[arg(long, default_value_t = 10)]
        input_size: usize,

        /// Declared message length. Defaults to the number of message bits.
        #[arg(long)]
        input_length: Option<usize>,

        /// Length of the padded output, i.e. the block size.
        #[arg(long, default_value_t = 10)]
        padded_length: usize,

        /// Corrupt the input after computing the expected output, so a prover must reject it.
        #[arg(long)]
        tamper: bool,
    },
}

fn main() -> Result<(), CliError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();

    let args = Args::parse();

    match args.command {
        Command::Offsets { pi } => {
            let offsets = generate_round_offsets_with(pi.mapping());
            offsets.check_read_offsets()?;
            if let Err(err) = offsets.check_write_offsets() {
                warn!("write offsets are not a permutation of the non-origin lanes: {err}");
            }
            info!(?pi, "generated rho/pi offsets");
            println!("{}", offsets_report(&offsets));
        }
        Command::PadVector {
            message,
            input_size,
            input_length,
            padded_length,
            tamper,
        } => {
            let message = message.unwrap_or_default();
            let vector = build_vector(
                &message.0,
                input_size,
                input_length,
                padded_length,
                tamper,
            )?;
            info!(
                input_length = vector.input_length,
                padded_length, tamper, "built padding test vector"
            );
            println!("{}", serde_json::to_string_pretty(&vector)?);
        }
    }

    Ok(())
}
