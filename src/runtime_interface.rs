// src/runtime_interface.rs

use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;
use std::error::Error;
use std::fs;
use std::io::Write;

use crate::config::TypegenConfig;
use crate::type_translator::{TranslateError, Translator};

// 1. Define CLI Arguments
#[derive(Parser, Debug)]
#[clap(author, version, about = "Translates encoded native interface type signatures into TypeScript type expressions", long_about = None)]
struct CliArgs {
    /// Encoded signature to translate. May be given multiple times.
    #[clap(long, value_parser)]
    signature: Vec<String>,

    /// File with one encoded signature per line. Blank lines and lines
    /// starting with '#' are skipped.
    #[clap(long, value_parser)]
    input: Option<String>,

    /// Optional JSON config file (fallback type, primitive overrides).
    #[clap(long, value_parser)]
    config: Option<String>,

    /// Optional output file for the translated type expressions, one per
    /// line, preceded by a generation banner.
    #[clap(long, value_parser)]
    output: Option<String>,

    /// Print a JSON array of {encoded, translated} records instead of
    /// plain "encoded => translated" lines.
    #[clap(long)]
    json: bool,

    /// Fail on structurally malformed signatures instead of emitting the
    /// fallback type for them.
    #[clap(long)]
    strict: bool,
}

// Custom error wrapper to combine various error types
#[derive(Debug)]
enum RuntimeError {
    Translate(TranslateError),
    Io(std::io::Error),
    Message(String),
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeError::Translate(e) => write!(f, "Translate error: {}", e),
            RuntimeError::Io(e) => write!(f, "IO error: {}", e),
            RuntimeError::Message(s) => write!(f, "Runtime error: {}", s),
        }
    }
}

impl Error for RuntimeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RuntimeError::Translate(e) => Some(e),
            RuntimeError::Io(e) => Some(e),
            RuntimeError::Message(_) => None,
        }
    }
}

impl From<TranslateError> for RuntimeError {
    fn from(err: TranslateError) -> Self { RuntimeError::Translate(err) }
}
impl From<std::io::Error> for RuntimeError {
    fn from(err: std::io::Error) -> Self { RuntimeError::Io(err) }
}

/// One translated signature, as emitted by `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct TranslationRecord {
    pub encoded: String,
    pub translated: String,
}

// 2. `run_cli` Function
pub fn run_cli() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();

    // 1. Build the translator from defaults or the given config file
    let config = match &args.config {
        Some(path) => {
            println!("Loading typegen config from: {}", path);
            TypegenConfig::load(path)?
        }
        None => TypegenConfig::default(),
    };
    let translator = Translator::new(&config);

    // 2. Collect encoded signatures from flags and the input file
    let mut signatures: Vec<String> = args.signature.clone();
    if let Some(input_path) = &args.input {
        println!("Reading encoded signatures from: {}", input_path);
        let contents = fs::read_to_string(input_path).map_err(RuntimeError::Io)?;
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            signatures.push(line.to_string());
        }
    }
    if signatures.is_empty() {
        return Err(Box::new(RuntimeError::Message(
            "No signatures to translate. Provide --signature and/or --input.".to_string(),
        )));
    }
    println!("Translating {} signature(s)...", signatures.len());

    // 3. Translate. The translator is a pure function over immutable state,
    //    so the batch maps in parallel; par_iter keeps input order.
    let records: Vec<TranslationRecord> = if args.strict {
        signatures
            .par_iter()
            .map(|encoded| {
                translator
                    .translate_checked(encoded)
                    .map(|translated| TranslationRecord {
                        encoded: encoded.clone(),
                        translated,
                    })
            })
            .collect::<Result<Vec<_>, TranslateError>>()
            .map_err(RuntimeError::Translate)?
    } else {
        signatures
            .par_iter()
            .map(|encoded| TranslationRecord {
                encoded: encoded.clone(),
                translated: translator.translate_type(encoded),
            })
            .collect()
    };

    // 4. Emit results
    if args.json {
        let rendered = serde_json::to_string_pretty(&records)
            .map_err(|e| RuntimeError::Message(format!("Failed to serialize records: {}", e)))?;
        println!("{}", rendered);
    } else {
        for record in &records {
            println!("{} => {}", record.encoded, record.translated);
        }
    }

    if let Some(output_path) = &args.output {
        write_output_file(output_path, &records).map_err(RuntimeError::Io)?;
        println!("Wrote {} translated type(s) to {}", records.len(), output_path);
    }

    Ok(())
}

fn write_output_file(path: &str, records: &[TranslationRecord]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    writeln!(
        file,
        "// Generated by rust_native_typegen_cli on {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    for record in records {
        writeln!(file, "{}", record.translated)?;
    }
    Ok(())
}
