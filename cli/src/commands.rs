use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use math::radix::{self, Radix};
use num_bigint::{BigInt, Sign};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use shamir_core::{Dealer, SecretReconstructor, ShareRecord};
use tracing::info;

use crate::logging::LogFormat;

/// Input file read when neither an argument nor `SHAMIR_INPUT` names one.
pub const DEFAULT_INPUT: &str = "test2.json";

#[derive(Debug, Parser)]
#[command(name = "shamir")]
#[command(about = "Reconstruct secrets from radix-encoded Shamir shares", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log filter directives, e.g. `shamir_core=debug`
    #[arg(long, global = true, env = "SHAMIR_LOG")]
    pub log: Option<String>,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Recover the secret from a JSON share record
    Reconstruct {
        /// Share record to read, `-` for stdin
        #[arg(env = "SHAMIR_INPUT", default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Use this threshold instead of the record's `k`
        #[arg(short = 'k', long)]
        threshold: Option<usize>,
    },

    /// Split a secret into a JSON share record
    Split {
        /// Non-negative decimal secret
        #[arg(short, long, value_parser = parse_secret)]
        secret: BigInt,

        /// Shares needed to reconstruct
        #[arg(short = 'k', long)]
        threshold: usize,

        /// Shares to produce
        #[arg(short = 'n', long)]
        shares: usize,

        /// Radix for the share values, cycled when repeated
        #[arg(short, long = "base")]
        bases: Vec<Radix>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the decimal value of a digit string
    Decode {
        /// Radix the digits are written in
        base: String,

        /// Digits to decode
        digits: String,
    },
}

fn parse_secret(value: &str) -> Result<BigInt, String> {
    let secret: BigInt = value
        .trim()
        .parse()
        .map_err(|_| format!("{value:?} is not a decimal integer"))?;
    if secret.sign() == Sign::Minus {
        return Err("secret must be non-negative".to_string());
    }
    Ok(secret)
}

/// Execute `cli` and return what should be printed on stdout.
pub fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Command::Reconstruct { input, threshold } => {
            Ok(reconstruct(input, *threshold)?.to_string())
        }
        Command::Split {
            secret,
            threshold,
            shares,
            bases,
            seed,
        } => split(secret, *threshold, *shares, bases, *seed),
        Command::Decode { base, digits } => {
            Ok(radix::decode_str(digits, base)?.to_string())
        }
    }
}

/// Read a share record from `input`, or stdin when `input` is `-`.
pub fn read_record(input: &Path) -> Result<ShareRecord> {
    if input == Path::new("-") {
        return ShareRecord::from_reader(io::stdin().lock())
            .context("reading share record from stdin");
    }
    let file = File::open(input)
        .with_context(|| format!("opening {}", input.display()))?;
    ShareRecord::from_reader(BufReader::new(file))
        .with_context(|| format!("reading share record {}", input.display()))
}

pub fn reconstruct(input: &Path, threshold: Option<usize>) -> Result<BigInt> {
    let record = read_record(input)?;
    let engine = match threshold {
        Some(k) => {
            SecretReconstructor::from_record_with_threshold(&record, k)?
        }
        None => SecretReconstructor::from_record(&record)?,
    };
    info!(
        input = %input.display(),
        threshold = engine.threshold(),
        shares = engine.len(),
        "loaded share record"
    );
    Ok(engine.reconstruct_secret()?)
}

pub fn split(
    secret: &BigInt,
    threshold: usize,
    shares: usize,
    bases: &[Radix],
    seed: Option<u64>,
) -> Result<String> {
    let dealer = Dealer::new(threshold, shares)?;
    let mut rng = match seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_rng(&mut rand::rng()),
    };
    let points = dealer.split(secret, &mut rng)?;
    let record = dealer.encode_record(&points, bases)?;
    Ok(record.to_json_pretty()?)
}
