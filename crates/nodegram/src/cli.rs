//! Command-line entry point: generate a grammar from a JSON schema file.
use facet::Facet;
use nodegram::{generate, parse_schema, GeneratorConfig};
use std::process::ExitCode;

/// Generate an ANTLR-style grammar from a syntax-node schema.
#[derive(Debug, Facet)]
struct Args {
    /// Path to the schema JSON file.
    #[facet(positional)]
    schema: String,

    /// Write the grammar here instead of stdout.
    #[facet(named, short = 'o', default)]
    output: Option<String>,

    /// Grammar name for the `grammar <name>;` header.
    #[facet(named, short = 'n', default)]
    name: Option<String>,

    /// Abstract root type, never emitted as a rule.
    #[facet(named, short = 'r', default)]
    root: Option<String>,
}

fn run(args: Args) -> Result<(), String> {
    let json = std::fs::read_to_string(&args.schema)
        .map_err(|e| format!("cannot read '{}': {e}", args.schema))?;
    let schema = parse_schema(&json).map_err(|e| e.to_string())?;

    let mut config = GeneratorConfig::csharp();
    if let Some(name) = args.name {
        config = config.with_grammar_name(name);
    }
    if let Some(root) = args.root {
        config = config.with_root_type(root);
    }

    let grammar = generate(&schema, &config).map_err(|e| e.to_string())?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &grammar).map_err(|e| format!("cannot write '{path}': {e}"))?;
            eprintln!("info: wrote grammar for {} types to '{path}'", schema.types.len());
        }
        None => print!("{grammar}"),
    }
    Ok(())
}

fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let argv: Vec<&str> = argv.iter().map(String::as_str).collect();

    let args: Args = match facet_args::from_slice(&argv) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("error: {msg}");
            ExitCode::FAILURE
        }
    }
}
