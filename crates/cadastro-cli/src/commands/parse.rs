//! Parse command - extract form fields from a text file or stdin.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use cadastro_core::{FormParser, ParserConfig};

use super::load_config;

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input text file, or `-` for stdin (default: stdin)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not look up the address for a detected CEP
    #[arg(long)]
    no_postal: bool,

    /// Do not look up company data for a detected CNPJ
    #[arg(long)]
    no_company: bool,

    /// Trace field detection
    #[arg(long)]
    debug: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

impl ParseArgs {
    /// Whether detection traces were requested.
    pub fn debug(&self) -> bool {
        self.debug
    }
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let settings = load_config(config_path)?;

    let mut config = ParserConfig::from_config(&settings);
    if args.no_postal {
        config = config.with_auto_fetch_postal(false);
    }
    if args.no_company {
        config = config.with_auto_fetch_company(false);
    }
    if args.debug {
        config = config.with_debug(true);
    }

    let input = read_input(args.input.as_ref())?;
    info!("Read {} bytes of input", input.len());

    let parser = FormParser::new(config);
    let data = parser.parse_bytes(&input).await?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&data)?
    } else {
        serde_json::to_string(&data)?
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if data.is_empty() {
        eprintln!("{} No fields found in input.", style("ℹ").blue());
    }

    Ok(())
}

fn read_input(input: Option<&PathBuf>) -> anyhow::Result<Vec<u8>> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            Ok(fs::read(path)?)
        }
        _ => {
            let mut buffer = Vec::new();
            std::io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}
