//! `protoc-gen-twirp_ruby`
//!
//! protoc plugin that generates Twirp service and client classes for Ruby:
//!
//! ```text
//! protoc --ruby_out=. --twirp_ruby_out=. hello/world/service.proto
//! ```
//!
//! The plugin takes no flags when run by protoc; the ones below are for
//! running it by hand. Set `RUST_LOG` (e.g. `RUST_LOG=debug`) to get logs on
//! stderr during a protoc run.

use std::io;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

mod plugin;

use plugin::InputFormat;

#[derive(Parser)]
#[command(name = "protoc-gen-twirp_ruby")]
#[command(
    author,
    version,
    about = "protoc plugin generating Twirp service bindings for Ruby"
)]
struct Cli {
    /// Encoding of the request read from stdin.
    #[arg(long, value_enum, default_value_t = InputFormat::Proto)]
    input: InputFormat,

    /// Print the generated files as text instead of an encoded response.
    #[arg(long)]
    dump: bool,

    /// Log at debug level (overridden by `RUST_LOG`).
    #[arg(short, long)]
    verbose: bool,
}

fn setup_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    // stdout carries the response; logs only ever go to stderr.
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let request = plugin::read_request(io::stdin().lock(), cli.input)?;
    let files = twirp_ruby_codegen::generate(&request)?;

    if cli.dump {
        plugin::dump_files(io::stdout().lock(), &files)
    } else {
        plugin::write_response(io::stdout().lock(), files)
    }
}

fn main() {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
