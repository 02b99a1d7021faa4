use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use lotsim_params::{ControllerType, Param, ParamValue, REGISTRY};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "lotsim", about = "Lottery simulation parameter table CLI")]
struct Cli {
    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every parameter with its float and exact forms
    List,

    /// Show a single parameter by name
    Show {
        /// Parameter name, e.g. F_MIN
        name: String,
    },

    /// Verify the table invariants; exits nonzero on any violation
    Check,

    /// Serialize the parameter table
    Export {
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Output file path (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Toml,
}

#[derive(Serialize)]
struct Export<'a> {
    params: &'a [Param],
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!("resolved {} parameters", REGISTRY.len());

    match &cli.command {
        Commands::List => cmd_list(),
        Commands::Show { name } => cmd_show(name),
        Commands::Check => cmd_check(),
        Commands::Export { format, out } => cmd_export(*format, out.as_deref()),
    }
}

fn cmd_list() -> Result<()> {
    for p in REGISTRY.iter() {
        let value = p.value.to_string();
        println!("{:<26} {:<22} {}", p.name, value, p.exact_decimal);
    }
    Ok(())
}

fn cmd_show(name: &str) -> Result<()> {
    let p = REGISTRY.require(name)?;
    println!("name:  {}", p.name);
    println!("value: {}", p.value);
    println!("exact: {}", p.exact_decimal);
    if let ParamValue::Int(tag) = p.value {
        if p.name.starts_with("CONTROLLER_TYPE_") {
            if let Ok(ct) = ControllerType::try_from(tag) {
                println!("variant: {ct}");
            }
        }
    }
    Ok(())
}

fn cmd_check() -> Result<()> {
    let violations = REGISTRY.check();
    if violations.is_empty() {
        println!("ok: {} parameters, all invariants hold", REGISTRY.len());
        return Ok(());
    }
    for v in &violations {
        eprintln!("FAIL {}: {}", v.invariant, v.detail);
    }
    bail!("{} invariant(s) violated", violations.len());
}

fn cmd_export(format: Format, out: Option<&std::path::Path>) -> Result<()> {
    let export = Export {
        params: REGISTRY.params(),
    };
    let rendered = match format {
        Format::Json => serde_json::to_string_pretty(&export)?,
        Format::Toml => toml::to_string_pretty(&export)?,
    };
    match out {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{rendered}"),
    }
    Ok(())
}
