use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use loglens::record::{LogRecord, MalformedPolicy, index_lines, lift_lines};
use loglens::schema::{JsonType, SchemaEntry, enumerate, validate};
use loglens::{AssertMode, Result, diff, jsonp, key_diff, totals};
use serde::Serialize;
use serde_json::Value;
use std::fs;

#[derive(Parser)]
#[command(name = "loglens")]
#[command(about = "Lift, index, aggregate, diff and schema-check JSON logs", long_about = None)]
struct Cli {
    /// Compact JSON output (default is pretty-printed).
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lift plain text into a JSON array of line strings.
    ToJson {
        input: String,

        #[arg(short = 'o', long)]
        out: Option<String>,
    },

    /// Index raw lines into {severity, message} records.
    Index {
        input: String,

        #[arg(long, value_enum, default_value = "fail")]
        on_malformed: OnMalformed,

        #[arg(short = 'o', long)]
        out: Option<String>,
    },

    /// Count records per severity tag.
    Totals {
        input: String,

        #[arg(long, value_enum, default_value = "json")]
        format: TotalsFormat,

        #[arg(short = 'o', long)]
        out: Option<String>,
    },

    /// Structural set difference between two record arrays (exits nonzero
    /// on any difference).
    Diff {
        left: String,
        right: String,

        #[arg(short = 'o', long)]
        out: Option<String>,
    },

    /// Severity-tag set difference between two record arrays.
    KeyDiff {
        left: String,
        right: String,

        /// Which direction of difference fails the check.
        #[arg(long, value_enum, default_value = "no-missing")]
        assert: AssertArg,

        #[arg(short = 'o', long)]
        out: Option<String>,
    },

    /// Enumerate every path in a document with its runtime type.
    SchemaDump {
        input: String,

        /// Skip nodes deeper than this (root is depth 0).
        #[arg(long)]
        max_depth: Option<usize>,

        #[arg(short = 'o', long)]
        out: Option<String>,
    },

    /// Check a target document against a schema dump (exits nonzero on any
    /// violation).
    Validate {
        dump: String,
        target: String,

        #[arg(short = 'o', long)]
        out: Option<String>,
    },

    /// Wrap a document in a JSONP callback invocation.
    Jsonp {
        input: String,

        #[arg(long)]
        callback: String,

        #[arg(short = 'o', long)]
        out: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OnMalformed {
    Fail,
    Skip,
}

impl From<OnMalformed> for MalformedPolicy {
    fn from(arg: OnMalformed) -> Self {
        match arg {
            OnMalformed::Fail => MalformedPolicy::Fail,
            OnMalformed::Skip => MalformedPolicy::Skip,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TotalsFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AssertArg {
    NoMissing,
    NoAdded,
    Both,
    None,
}

impl From<AssertArg> for AssertMode {
    fn from(arg: AssertArg) -> Self {
        match arg {
            AssertArg::NoMissing => AssertMode::NoMissing,
            AssertArg::NoAdded => AssertMode::NoAdded,
            AssertArg::Both => AssertMode::Both,
            AssertArg::None => AssertMode::None,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let compact = cli.compact;

    match cli.cmd {
        Commands::ToJson { input, out } => {
            let text = read_text(&input)?;
            let lines = lift_lines(&text);
            emit(out.as_deref(), &render_json(&lines, compact)?)?;
        }

        Commands::Index {
            input,
            on_malformed,
            out,
        } => {
            let text = read_text(&input)?;
            let records = index_lines(&text, on_malformed.into())
                .with_context(|| format!("index {}", input))?;
            emit(out.as_deref(), &render_json(&records, compact)?)?;
        }

        Commands::Totals { input, format, out } => {
            let records = read_records(&input)?;
            let totals = totals::severity_totals(&records);
            let payload = match format {
                TotalsFormat::Json => render_json(&totals, compact)?,
                TotalsFormat::Text => totals::render_totals_text(&totals),
            };
            emit(out.as_deref(), &payload)?;
        }

        Commands::Diff { left, right, out } => {
            let left_items = read_array(&left)?;
            let right_items = read_array(&right)?;
            let result = diff(&left_items, &right_items);
            emit(out.as_deref(), &render_json(&result, compact)?)?;
            if !result.is_empty() {
                std::process::exit(1);
            }
        }

        Commands::KeyDiff {
            left,
            right,
            assert,
            out,
        } => {
            let left_items = read_array(&left)?;
            let right_items = read_array(&right)?;
            let result = key_diff(&left_items, &right_items)?;
            emit(out.as_deref(), &render_json(&result, compact)?)?;
            if !AssertMode::from(assert).passes(&result) {
                std::process::exit(1);
            }
        }

        Commands::SchemaDump {
            input,
            max_depth,
            out,
        } => {
            let doc = read_json(&input)?;
            let entries = enumerate(&doc, max_depth);
            emit(out.as_deref(), &render_json(&entries, compact)?)?;
        }

        Commands::Validate { dump, target, out } => {
            let text = read_text(&dump)?;
            let entries: Vec<SchemaEntry> = serde_json::from_str(&text)
                .with_context(|| format!("parse schema dump {}", dump))?;
            let doc = read_json(&target)?;
            let report = validate(&entries, &doc);
            emit(out.as_deref(), &render_json(&report, compact)?)?;
            if !report.is_conformant() {
                std::process::exit(1);
            }
        }

        Commands::Jsonp {
            input,
            callback,
            out,
        } => {
            let doc = read_json(&input)?;
            let payload = jsonp::wrap_jsonp(&doc, &callback)?;
            emit(out.as_deref(), &payload)?;
        }
    }

    Ok(())
}

fn read_text(path: &str) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path))
}

fn read_json(path: &str) -> Result<Value> {
    serde_json::from_str(&read_text(path)?).with_context(|| format!("parse JSON in {}", path))
}

fn read_array(path: &str) -> Result<Vec<Value>> {
    match read_json(path)? {
        Value::Array(items) => Ok(items),
        other => bail!(
            "{}: expected a top-level JSON array, found {}",
            path,
            JsonType::of(&other)
        ),
    }
}

fn read_records(path: &str) -> Result<Vec<LogRecord>> {
    serde_json::from_str(&read_text(path)?).with_context(|| format!("parse records in {}", path))
}

fn render_json<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    let mut text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    text.push('\n');
    Ok(text)
}

fn emit(out: Option<&str>, payload: &str) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, payload).with_context(|| format!("write {}", path))?;
            println!("Wrote {}", path);
        }
        None => print!("{}", payload),
    }
    Ok(())
}
