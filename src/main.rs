//! Rowmill CLI - transform transaction CSV files declaratively
//!
//! # Main Commands
//!
//! ```bash
//! rowmill transform input.csv -c config.json -g groups.json -o output.csv
//! rowmill parse input.csv               # Just parse CSV to JSON records
//! ```
//!
//! # Debug Commands (for development)
//!
//! ```bash
//! rowmill classify -r rules.json a2 100 cc   # First-match-wins rule lookup
//! rowmill hash "some value"                  # SHA-256 keying digest
//! rowmill example-config                     # Show example configuration
//! ```

use clap::{Parser, Subcommand};
use rowmill::{
    example_config, group_master_from_json, parse_file_auto, sha256_hex, Pipeline, PipelineConfig,
    RuleMatcher,
};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rowmill")]
#[command(about = "Transform transaction CSV records with a declarative configuration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full pipeline: CSV + config + group master → serialized rows
    Transform {
        /// Input CSV file
        input: PathBuf,

        /// Pipeline configuration JSON file
        #[arg(short, long)]
        config: PathBuf,

        /// Group master JSON file (object of key → label)
        #[arg(short, long)]
        groups: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Omit the header line
        #[arg(long)]
        no_header: bool,
    },

    /// Parse a CSV file and output JSON records
    Parse {
        /// Input CSV file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Classify values against a first-match-wins regex rule list
    Classify {
        /// Rule list JSON file ([{patterns, result}, ...])
        #[arg(short, long)]
        rules: PathBuf,

        /// Values to classify
        values: Vec<String>,
    },

    /// Print the SHA-256 hex digest of a value
    Hash {
        /// Value to hash
        value: String,
    },

    /// Show an example pipeline configuration
    ExampleConfig,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Transform {
            input,
            config,
            groups,
            output,
            no_header,
        } => cmd_transform(
            &input,
            &config,
            groups.as_deref(),
            output.as_deref(),
            no_header,
        ),

        Commands::Parse { input, output } => cmd_parse(&input, output.as_deref()),

        Commands::Classify { rules, values } => cmd_classify(&rules, &values),

        Commands::Hash { value } => {
            println!("{}", sha256_hex(&value));
            Ok(())
        }

        Commands::ExampleConfig => cmd_example_config(),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_transform(
    input: &Path,
    config_path: &Path,
    groups_path: Option<&Path>,
    output: Option<&Path>,
    no_header: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Processing: {}", input.display());

    let config = PipelineConfig::from_json(&fs::read_to_string(config_path)?)?;

    let master = match groups_path {
        Some(path) => group_master_from_json(&fs::read_to_string(path)?)?,
        None => HashMap::new(),
    };
    eprintln!("   Group master: {} entries", master.len());

    let parse_result = parse_file_auto(input)?;
    eprintln!("   Encoding: {}", parse_result.encoding);
    eprintln!("   Delimiter: '{}'", format_delimiter(parse_result.delimiter));
    eprintln!("   Columns: {}", parse_result.headers.join(", "));
    eprintln!("   Rows: {}", parse_result.records.len());

    let pipeline = Pipeline::from_config(&config, master)?;
    let lines = pipeline.run(&parse_result.records);
    eprintln!("⚙️  Transformed {} records", lines.len());

    let mut out = String::new();
    if !no_header {
        out.push_str(&pipeline.columns().join(","));
        out.push('\n');
    }
    for line in &lines {
        out.push_str(line);
        out.push('\n');
    }
    write_output(&out, output)?;

    eprintln!("✨ Done!");
    Ok(())
}

fn cmd_parse(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Parsing CSV: {}", input.display());

    let result = parse_file_auto(input)?;
    eprintln!("   Encoding: {}", result.encoding);
    eprintln!("   Delimiter: '{}'", format_delimiter(result.delimiter));
    eprintln!("   Columns: {}", result.headers.join(", "));
    eprintln!("✅ Parsed {} records", result.records.len());

    let json = serde_json::to_string_pretty(&result.records)?;
    write_output(&json, output)?;

    Ok(())
}

fn cmd_classify(rules_path: &Path, values: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let matcher = RuleMatcher::from_json(&fs::read_to_string(rules_path)?)?;

    for value in values {
        match matcher.classify(value) {
            Some(result) => println!("{value}\t{result}"),
            None => println!("{value}\t-"),
        }
    }

    Ok(())
}

fn cmd_example_config() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", example_config().to_json()?);
    Ok(())
}

fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
