pub mod cli;
pub mod codegen;
pub mod model;
pub mod parser;
pub mod writer;

use anyhow::Context;
use clap::Parser;

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // 1. ── Parse ──────────────────────────────────────────────────────
    let json = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Reading {}", args.input.display()))?;
    let scene = parser::load_from_json(&json).with_context(|| "Parsing scene JSON")?;

    // 2. ── Generate ───────────────────────────────────────────────────
    let unit = codegen::run(&scene, &args.input);

    // 3. ── Write output ───────────────────────────────────────────────
    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Creating {}", args.output.display()))?;

    writer::js::emit(&unit, &args.output).with_context(|| "Writing scene class")?;

    Ok(())
}
