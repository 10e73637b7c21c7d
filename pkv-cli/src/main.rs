//! Partial key verification tool
//!
//! Creates key definitions, issues keys from them and checks keys one subkey at
//! a time, the way a shipped program would.
//!
//! Usage:
//!   pkv definition --keys 5 --out product.json
//!   pkv generate --definition product.json --name user@example.com
//!   pkv validate --definition product.json --key XXXX-... --index 2
//!   pkv serial XXXX-...

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::{ArgGroup, Parser, Subcommand};
use pkv_cli::SeedSource;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "pkv")]
#[command(about = "Issue and check partial-verification product keys")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a random key definition
    Definition {
        /// Number of subkeys per key
        #[arg(short, long)]
        keys: usize,

        /// Write the definition here instead of printing it
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Issue keys from a definition
    #[command(group(ArgGroup::new("source").required(true).args(["seed", "name", "count"])))]
    Generate {
        /// Path to the key definition
        #[arg(short, long)]
        definition: PathBuf,

        /// Serial number to issue the key for
        #[arg(long)]
        seed: Option<u32>,

        /// Name (e.g. e-mail address) hashed into the serial number
        #[arg(long)]
        name: Option<String>,

        /// Issue this many keys for random serial numbers
        #[arg(long)]
        count: Option<usize>,
    },

    /// Check one subkey of a key
    Validate {
        /// Path to the key definition
        #[arg(short, long)]
        definition: PathBuf,

        /// Key to check, with or without dashes
        #[arg(short, long)]
        key: String,

        /// Subkey slot to check
        #[arg(short, long)]
        index: usize,

        /// Name the key must have been issued to
        #[arg(long)]
        name: Option<String>,
    },

    /// Print the serial number embedded in a key
    Serial {
        /// Key to read
        key: String,
    },
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match args.command {
        Command::Definition { keys, out } => {
            if let Some(json) = pkv_cli::new_definition(keys, out.as_deref())? {
                println!("{json}");
            } else if let Some(path) = out {
                info!("Definition written to {}", path.display());
            }
        }
        Command::Generate {
            definition,
            seed,
            name,
            count,
        } => {
            let source = match (seed, name, count) {
                (Some(seed), _, _) => SeedSource::Seed(seed),
                (_, Some(name), _) => SeedSource::Name(name),
                (_, _, Some(count)) => SeedSource::Count(count),
                (None, None, None) => bail!("one of --seed, --name or --count is required"),
            };
            let definition = pkv_cli::load_definition(&definition)?;
            for (serial, key) in pkv_cli::generate(&definition, &source)? {
                println!("{serial}\t{key}");
            }
        }
        Command::Validate {
            definition,
            key,
            index,
            name,
        } => {
            let definition = pkv_cli::load_definition(&definition)?;
            if pkv_cli::validate(&definition, &key, index, name.as_deref())? {
                println!("valid");
            } else {
                println!("invalid");
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Serial { key } => {
            println!("{}", pkv_cli::serial(&key)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
