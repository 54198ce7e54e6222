//! Command-line interface for the string function registry
//!
//! Calls any registered function by name with JSON arguments.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use string_tasks::registry::{CacheConfig, FunctionRegistry, create_registry_with_config};
use string_tasks::{Value, render_rectangle, rot13};
use std::process;

#[derive(Parser)]
#[command(name = "string-tasks")]
#[command(about = "Call string functions by name from the command line")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Log debug output (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Disable result caching
    #[arg(long, global = true)]
    no_cache: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered functions
    List {
        /// Print full signatures instead of names
        #[arg(short, long)]
        signatures: bool,
    },
    /// Call a function by name
    Call {
        /// Function name, e.g. rot13 or renderRectangle
        function: String,
        /// Arguments as JSON values; anything that is not valid JSON is taken as a string
        args: Vec<String>,
        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
        /// Suppress informational messages
        #[arg(short, long)]
        quiet: bool,
    },
    /// Encode text with ROT13
    Rot13 {
        /// Text to encode
        text: String,
    },
    /// Draw a rectangle
    Rectangle {
        /// Width in characters (at least 2)
        width: usize,
        /// Height in lines (at least 2)
        height: usize,
    },
}

fn main() {
    // Setup human-panic for better error messages
    human_panic::setup_panic!();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Execute a command and return everything it prints to stdout
fn run(cli: Cli) -> Result<String> {
    let config = if cli.no_cache {
        CacheConfig::disabled()
    } else {
        CacheConfig::default()
    };
    let registry = create_registry_with_config(config);

    match cli.command {
        Commands::List { signatures } => Ok(format_listing(&registry, signatures)),
        Commands::Call {
            function,
            args,
            pretty,
            quiet,
        } => handle_call(&registry, &function, &args, pretty, quiet),
        Commands::Rot13 { text } => Ok(format!("{}\n", rot13(&text))),
        Commands::Rectangle { width, height } => Ok(render_rectangle(width, height)?),
    }
}

fn format_listing(registry: &FunctionRegistry, signatures: bool) -> String {
    let mut output = String::new();
    for name in registry.function_names() {
        let Some(function) = registry.get(name) else {
            continue;
        };
        if signatures {
            output.push_str(&format!(
                "{}\n    {}: {}\n",
                function.signature(),
                function.human_friendly_name(),
                function.documentation()
            ));
        } else {
            output.push_str(name);
            output.push('\n');
        }
    }
    output
}

fn handle_call(
    registry: &FunctionRegistry,
    function: &str,
    raw_args: &[String],
    pretty: bool,
    quiet: bool,
) -> Result<String> {
    let args: Vec<Value> = raw_args.iter().map(|raw| parse_arg(raw)).collect();
    log::debug!("Calling {function} with {args:?}");

    let result = registry
        .evaluate_function(function, &args)
        .with_context(|| format!("calling '{function}'"))?;

    let stats = registry.cache_stats();
    log::debug!(
        "Result cache: {} hit(s), {} miss(es), {:.0}% hit rate",
        stats.hits,
        stats.misses,
        stats.hit_rate() * 100.0
    );

    if !quiet {
        if let Some(signature) = registry.get(function).map(|f| f.signature()) {
            eprintln!("Function: {signature}");
        }
        eprintln!("Result:");
    }

    format_result(&result, pretty)
}

/// Render a result as a line of JSON
fn format_result(result: &Value, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(format!("{json}\n"))
}

/// Parse a command-line argument as JSON, falling back to a plain string
fn parse_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
