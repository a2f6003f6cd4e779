use std::env;
use std::io::{self, Read};
use std::process;

use chrono::NaiveDateTime;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;
use zuid::{
    Direction, Generator, Input, Outcome, build, decompose, find_error, get_next, get_previous,
    walk,
};

const DEFAULT_SEQUENCE_COUNT: usize = 50;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone)]
struct ValueOpts {
    kind: String,
    json: bool,
}

impl Default for ValueOpts {
    fn default() -> Self {
        Self {
            kind: "str".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Clone)]
struct SequenceOpts {
    kind: String,
    count: usize,
    reverse: bool,
}

fn default_count() -> usize {
    env::var("ZUID_COUNT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_SEQUENCE_COUNT)
}

fn print_help() {
    eprintln!(
        "zuid - Zettelkasten Unique Identifier (zUID) CLI\n\n\
Usage:\n  zuid now [--json]\n  zuid build <value> [--kind int|str|ts] [--json]\n  zuid decompose <value> [--kind int|str|ts] [--json]\n  zuid validate <value> [--kind int|str|ts] [--json]\n  zuid next <value> [--kind int|str|ts]\n  zuid prev <value> [--kind int|str|ts]\n  zuid sequence <value> [--kind int|str|ts] [--count <n>] [--reverse]\n  zuid batch < values.json\n\n\
Kinds:\n  int  canonical 12-digit integer (no padding)\n  str  digit string, right-padded with zeros to 12 digits\n  ts   timestamp YYYY-MM-DDTHH:MM\n\n\
Environment:\n  ZUID_COUNT  default --count for sequence (50)\n  RUST_LOG    log filter (default: warn)\n"
    );
}

fn check_kind(kind: &str) -> Result<(), String> {
    match kind {
        "int" | "str" | "ts" => Ok(()),
        _ => Err("--kind must be one of: int, str, ts".to_string()),
    }
}

fn parse_value_flags(args: &[String]) -> Result<ValueOpts, String> {
    let mut opts = ValueOpts::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--kind" => {
                if i + 1 >= args.len() {
                    return Err("missing value for --kind".to_string());
                }
                opts.kind = args[i + 1].clone();
                i += 2;
            }
            "--json" => {
                opts.json = true;
                i += 1;
            }
            _ => return Err(format!("unknown flag: {}", args[i])),
        }
    }

    check_kind(&opts.kind)?;
    Ok(opts)
}

fn parse_sequence_flags(args: &[String]) -> Result<SequenceOpts, String> {
    let mut opts = SequenceOpts {
        kind: "str".to_string(),
        count: default_count(),
        reverse: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--kind" => {
                if i + 1 >= args.len() {
                    return Err("missing value for --kind".to_string());
                }
                opts.kind = args[i + 1].clone();
                i += 2;
            }
            "--count" => {
                if i + 1 >= args.len() {
                    return Err("missing value for --count".to_string());
                }
                opts.count = args[i + 1]
                    .parse::<usize>()
                    .map_err(|_| "invalid integer for --count".to_string())?;
                i += 2;
            }
            "--reverse" => {
                opts.reverse = true;
                i += 1;
            }
            _ => return Err(format!("unknown flag: {}", args[i])),
        }
    }

    check_kind(&opts.kind)?;
    Ok(opts)
}

fn to_input(raw: &str, kind: &str) -> Result<Input, String> {
    match kind {
        "int" => raw
            .parse::<i64>()
            .map(Input::from)
            .map_err(|_| format!("invalid integer: {raw}")),
        "ts" => NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
            .map(Input::from)
            .map_err(|e| format!("invalid timestamp {raw}: {e}")),
        _ => Ok(Input::from(raw)),
    }
}

fn split_value(args: &[String], cmd: &str) -> Result<(String, Vec<String>), String> {
    match args.split_first() {
        Some((value, rest)) => Ok((value.clone(), rest.to_vec())),
        None => Err(format!("{cmd} requires a value")),
    }
}

fn outcome_json(outcome: &Outcome) -> Value {
    match outcome {
        Outcome::Created(z) => json!({ "status": outcome.as_str(), "zuid": z }),
        Outcome::Duplicate(z) => json!({ "status": outcome.as_str(), "zuid": z }),
        Outcome::Invalid(err) => json!({
            "status": outcome.as_str(),
            "kind": err.kind(),
            "error": err.to_string(),
        }),
    }
}

fn print_json(payload: &Value) -> Result<(), String> {
    println!(
        "{}",
        serde_json::to_string(payload).map_err(|e| e.to_string())?
    );
    Ok(())
}

fn run_now(args: &[String]) -> Result<(), String> {
    let opts = parse_value_flags(args)?;
    let outcome = Generator::new().now();

    if opts.json {
        print_json(&outcome_json(&outcome))?;
    }
    match outcome {
        Outcome::Created(z) | Outcome::Duplicate(z) => {
            if !opts.json {
                println!("{z}");
            }
            Ok(())
        }
        Outcome::Invalid(err) => Err(err.to_string()),
    }
}

fn run_build(args: &[String]) -> Result<(), String> {
    let (raw, tail) = split_value(args, "build")?;
    let opts = parse_value_flags(&tail)?;
    let zuid = build(to_input(&raw, &opts.kind)?).map_err(|e| e.to_string())?;

    if opts.json {
        print_json(&json!({
            "zuid": zuid,
            "components": zuid.components(),
        }))
    } else {
        println!("{zuid}");
        Ok(())
    }
}

fn run_decompose(args: &[String]) -> Result<(), String> {
    let (raw, tail) = split_value(args, "decompose")?;
    let opts = parse_value_flags(&tail)?;
    let c = decompose(to_input(&raw, &opts.kind)?).map_err(|e| e.to_string())?;

    if opts.json {
        print_json(&json!(c))
    } else {
        println!("year={}", c.year);
        println!("month={}", c.month);
        println!("day={}", c.day);
        println!("hour={}", c.hour);
        println!("minute={}", c.minute);
        Ok(())
    }
}

fn run_validate(args: &[String]) -> Result<(), String> {
    let (raw, tail) = split_value(args, "validate")?;
    let opts = parse_value_flags(&tail)?;
    let report = find_error(to_input(&raw, &opts.kind)?);

    if opts.json {
        print_json(&json!(report))?;
    } else {
        for message in &report.messages {
            println!("{message}");
        }
    }

    if report.valid {
        Ok(())
    } else {
        Err("invalid zuid".to_string())
    }
}

fn run_step(args: &[String], direction: Direction) -> Result<(), String> {
    let (raw, tail) = split_value(args, "step")?;
    let opts = parse_value_flags(&tail)?;
    let input = to_input(&raw, &opts.kind)?;
    let stepped = match direction {
        Direction::Forward => get_next(input),
        Direction::Backward => get_previous(input),
    }
    .map_err(|e| e.to_string())?;

    match stepped {
        Some(z) if opts.json => print_json(&json!({ "zuid": z })),
        Some(z) => {
            println!("{z}");
            Ok(())
        }
        None => Err("empty input has no neighbour".to_string()),
    }
}

fn run_sequence(args: &[String]) -> Result<(), String> {
    let (raw, tail) = split_value(args, "sequence")?;
    let opts = parse_sequence_flags(&tail)?;
    let start = build(to_input(&raw, &opts.kind)?).map_err(|e| e.to_string())?;
    let direction = if opts.reverse {
        Direction::Backward
    } else {
        Direction::Forward
    };

    let values = std::iter::once(start).chain(walk(start, direction));
    for (counter, zuid) in values.take(opts.count).enumerate() {
        println!("{counter:3} :: {zuid}");
    }
    Ok(())
}

fn run_batch() -> Result<(), String> {
    let mut raw = String::new();
    io::stdin()
        .read_to_string(&mut raw)
        .map_err(|e| e.to_string())?;
    let items = match serde_json::from_str::<Value>(&raw).map_err(|e| e.to_string())? {
        Value::Array(items) => items,
        _ => return Err("batch input must be a JSON array".to_string()),
    };

    let mut generator = Generator::new();
    for item in items {
        let outcome = match Input::try_from(item) {
            Ok(input) => generator.create(input),
            Err(err) => Outcome::Invalid(err),
        };
        print_json(&outcome_json(&outcome))?;
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        print_help();
        process::exit(2);
    }

    if args[0] == "-h" || args[0] == "--help" || args[0] == "help" {
        print_help();
        return;
    }

    let cmd = args[0].as_str();
    let rest = &args[1..];

    let res = match cmd {
        "now" => run_now(rest),
        "build" => run_build(rest),
        "decompose" => run_decompose(rest),
        "validate" => run_validate(rest),
        "next" => run_step(rest, Direction::Forward),
        "prev" => run_step(rest, Direction::Backward),
        "sequence" => run_sequence(rest),
        "batch" => run_batch(),
        _ => Err(format!("unknown command: {}", cmd)),
    };

    if let Err(err) = res {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
