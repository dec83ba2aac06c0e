use anyhow::{bail, Context};
use clap::{Parser as ClapParser, Subcommand, ValueEnum};
use sfv::Canonical;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Shape {
    Item,
    List,
    Dictionary,
}

#[derive(ClapParser)]
#[command(name = "sfv", about = "Parse and validate HTTP Structured Field Values")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a field value and print its canonical form.
    Parse {
        #[arg(long = "as", value_enum)]
        shape: Shape,
        value: String,
    },
    /// Parse a field value and report success/failure via exit code only.
    Check {
        #[arg(long = "as", value_enum)]
        shape: Shape,
        value: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Parse { shape, value } => {
            debug!(?shape, "parsing field value");
            let canonical = canonicalize(shape, &value).with_context(|| {
                warn!(%value, "failed to parse field value");
                "failed to parse field value"
            })?;
            println!("{canonical}");
            Ok(())
        }
        Command::Check { shape, value } => {
            debug!(?shape, "checking field value");
            match canonicalize(shape, &value) {
                Ok(_) => Ok(()),
                Err(err) => {
                    warn!(%value, %err, "field value failed validation");
                    bail!(err)
                }
            }
        }
    }
}

fn canonicalize(shape: Shape, value: &str) -> Result<String, sfv::Error> {
    Ok(match shape {
        Shape::Item => sfv::parse_item(value)?.canonical(),
        Shape::List => sfv::parse_list(value)?.canonical(),
        Shape::Dictionary => sfv::parse_dictionary(value)?.canonical(),
    })
}
