use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;

use vuegen::{extract_state_object, generate_component, ComponentUIDL, Diagnostics, EventHandlerStatement};

#[derive(Parser)]
#[command(name = "vuegen")]
#[command(about = "Generate a Vue component declaration from a UIDL JSON file", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the UIDL JSON file
    file: String,
    /// Component dependency names (comma-separated), e.g. --deps Bar,Baz
    #[arg(long, value_delimiter = ',')]
    deps: Vec<String>,
    /// Pretty-print the generated declaration
    #[arg(long)]
    pretty: bool,
}

/// Input document for one generation run: the UIDL component itself plus
/// the precomputed methods mapping (event name to ordered statements).
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    #[serde(flatten)]
    uidl: ComponentUIDL,
    #[serde(default)]
    methods: IndexMap<String, Vec<EventHandlerStatement>>,
}

fn run(cli: &Cli) -> Result<()> {
    let source = fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file))?;
    let request: GenerateRequest = serde_json::from_str(&source)
        .with_context(|| format!("failed to parse UIDL from {}", cli.file))?;

    let data = extract_state_object(&request.uidl.state_definitions);
    let mut diagnostics = Diagnostics::new();

    let declaration = generate_component(
        &request.uidl,
        &cli.deps,
        &data,
        &request.methods,
        &mut diagnostics,
    )
    .with_context(|| format!("failed to generate component \"{}\"", request.uidl.name))?;

    for diagnostic in diagnostics.entries() {
        eprintln!("{} {}", "warning:".yellow().bold(), diagnostic);
    }

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&declaration)?
    } else {
        serde_json::to_string(&declaration)?
    };
    println!("{rendered}");

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
