use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use clap::{Args, Parser, Subcommand};
use glob::glob;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, info};
use trackerd_core::{UplinkInput, UplinkOutput, decode_uplink};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("TRACKERD_BUILD_COMMIT"),
    ", built ",
    env!("TRACKERD_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "trackerd")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Decoder for Dragino TrackerD LoRaWAN uplink payloads.",
    long_about = None,
    after_help = "Examples:\n  trackerd uplink decode --fport 7 0c8040\n  trackerd uplink decode --fport 5 --base64 EwFHAf8OEQ==\n  trackerd uplink batch uplinks.json -o decoded.json"
)]
struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "TRACKERD_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on uplink payloads.
    Uplink {
        #[command(subcommand)]
        command: UplinkCommands,
    },
}

#[derive(Subcommand, Debug)]
enum UplinkCommands {
    /// Decode a single payload given on the command line.
    #[command(
        after_help = "Examples:\n  trackerd uplink decode --fport 7 0c8040\n  trackerd uplink decode --fport 2 --pretty 026dc3e0fb9714184f6e70"
    )]
    Decode {
        /// LoRaWAN fPort of the uplink
        #[arg(long, allow_negative_numbers = true)]
        fport: i64,

        /// Payload bytes, hex by default (an optional 0x prefix is accepted)
        payload: String,

        /// Read the payload as base64 instead of hex
        #[arg(long)]
        base64: bool,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Decode a JSON file holding one uplink or an array of uplinks.
    #[command(
        after_help = "Input format:\n  [{\"fPort\": 7, \"bytes\": [12, 128, 64]}, ...]\n\nExamples:\n  trackerd uplink batch uplinks.json -o decoded.json\n  trackerd uplink batch 'captures/*.json' --pretty"
    )]
    Batch {
        /// Path to a JSON file (a glob matching exactly one file is accepted)
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output path (JSON); stdout when omitted
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, conflicts_with = "compact")]
    pretty: bool,

    /// Compact JSON output (default)
    #[arg(long)]
    compact: bool,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,

    /// Exit with a non-zero code if any uplink could not be decoded
    #[arg(long)]
    strict: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BatchInput {
    Many(Vec<UplinkInput>),
    One(UplinkInput),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let result = match cli.command {
        Commands::Uplink { command } => match command {
            UplinkCommands::Decode {
                fport,
                payload,
                base64,
                output,
            } => cmd_uplink_decode(fport, &payload, base64, &output),
            UplinkCommands::Batch { input, output } => cmd_uplink_batch(&input, &output),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_logging(level: &str) {
    let level = level.parse::<Level>().unwrap_or(Level::WARN);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(level)
        .init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

fn cmd_uplink_decode(
    fport: i64,
    payload: &str,
    base64: bool,
    output: &OutputArgs,
) -> Result<(), CliError> {
    let bytes = if base64 {
        parse_base64_payload(payload)?
    } else {
        parse_hex_payload(payload)?
    };
    debug!(fport, len = bytes.len(), "decoding payload from arguments");

    let decoded = decode_uplink(&UplinkInput::new(fport, bytes));
    let json = serialize_output(&decoded, output)?;
    write_output(&json, output)?;
    check_strict(std::slice::from_ref(&decoded), output)
}

fn cmd_uplink_batch(input: &Path, output: &OutputArgs) -> Result<(), CliError> {
    let resolved = resolve_input_path(input)?;
    let uplinks = read_batch(&resolved)?;
    info!(path = %resolved.display(), count = uplinks.len(), "decoding batch");

    let decoded: Vec<UplinkOutput> = uplinks.iter().map(decode_uplink).collect();
    if let Some(report) = output.output.as_ref() {
        if report.exists() && fs::canonicalize(report).ok() == fs::canonicalize(&resolved).ok() {
            return Err(CliError::new(
                format!("output path must differ from input: {}", report.display()),
                Some("choose a different output path".to_string()),
            ));
        }
    }

    let json = serialize_output(&decoded, output)?;
    write_output(&json, output)?;
    check_strict(&decoded, output)
}

fn parse_hex_payload(payload: &str) -> Result<Vec<u8>, CliError> {
    let cleaned: String = payload
        .trim()
        .trim_start_matches("0x")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    hex::decode(&cleaned).map_err(|err| {
        CliError::new(
            format!("invalid hex payload '{}': {}", payload, err),
            Some("use an even number of hex digits, or pass --base64".to_string()),
        )
    })
}

fn parse_base64_payload(payload: &str) -> Result<Vec<u8>, CliError> {
    BASE64.decode(payload.trim()).map_err(|err| {
        CliError::new(
            format!("invalid base64 payload '{}': {}", payload, err),
            Some("drop --base64 to pass hex".to_string()),
        )
    })
}

fn read_batch(path: &Path) -> Result<Vec<UplinkInput>, CliError> {
    if !path.is_file() {
        return Err(CliError::new(
            format!("input file not found: {}", path.display()),
            Some("pass a JSON file with uplinks".to_string()),
        ));
    }
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    let batch: BatchInput = serde_json::from_str(&json).map_err(|err| {
        CliError::new(
            format!("invalid uplink JSON in {}: {}", path.display(), err),
            Some("expected {\"fPort\": N, \"bytes\": [...]} or an array of them".to_string()),
        )
    })?;
    Ok(match batch {
        BatchInput::Many(uplinks) => uplinks,
        BatchInput::One(uplink) => vec![uplink],
    })
}

fn serialize_output<T: Serialize + ?Sized>(
    value: &T,
    output: &OutputArgs,
) -> Result<String, CliError> {
    if output.pretty && output.compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if output.pretty {
        serde_json::to_string_pretty(value)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(value)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn write_output(json: &str, output: &OutputArgs) -> Result<(), CliError> {
    let Some(path) = output.output.as_ref() else {
        println!("{}", json);
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(path, json).with_context(|| format!("Failed to write output: {}", path.display()))?;

    if !output.quiet {
        eprintln!("OK: output written -> {}", path.display());
    }
    Ok(())
}

fn check_strict(decoded: &[UplinkOutput], output: &OutputArgs) -> Result<(), CliError> {
    let failed = decoded.iter().filter(|entry| entry.is_error()).count();
    if output.strict && failed > 0 {
        return Err(CliError::new(
            format!("{} of {} uplinks could not be decoded", failed, decoded.len()),
            Some("check the fPort and payload length".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        ));
    }
    if matches.len() > 1 {
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let more = if matches.len() > 3 { ", ..." } else { "" };
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches); matches: {}{}",
                pattern,
                matches.len(),
                listed,
                more
            ),
            Some("pass a single file, or run once per file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
