//! # chatview CLI
//!
//! Command-line interface for the chatview library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use log::info;

use chatview::ChatviewError;
use chatview::cli::Args;
use chatview::config::{OutputConfig, ParserConfig};
use chatview::core::{FilterConfig, FilterSummary, apply_filters, distinct_senders};
use chatview::discovery::{discover_chat_files, first_chat_file};
use chatview::format::{OutputFormat, to_format_string, write_to_format};
use chatview::parser::ChatLogParser;

fn main() {
    let args = <Args as ClapParser>::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .init();

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ChatviewError> {
    info!("chatview v{}", env!("CARGO_PKG_VERSION"));

    if args.list {
        let files = discover_chat_files(&args.input)?;
        if files.is_empty() {
            return Err(ChatviewError::no_chat_files(&args.input));
        }
        for file in files {
            println!("{}", file.display());
        }
        return Ok(());
    }

    let path = if args.input.is_dir() {
        let path = first_chat_file(&args.input)?;
        eprintln!("📂 Chat file: {}", path.display());
        path
    } else {
        args.input.clone()
    };

    let mut parser_config = ParserConfig::new();
    if let Some(only) = args.only {
        parser_config = parser_config.only(only);
    }
    let parser = ChatLogParser::with_config(parser_config);

    let parse_start = Instant::now();
    let report = parser.report_file(&path)?;
    info!(
        "Parsed {} of {} candidate lines in {:.2}s ({} dropped)",
        report.messages.len(),
        report.candidates,
        parse_start.elapsed().as_secs_f64(),
        report.dropped
    );

    if report.is_empty() {
        eprintln!("⚠️  No valid messages found.");
        return Ok(());
    }
    let messages = report.messages;

    if args.list_senders {
        for sender in distinct_senders(&messages) {
            println!("{}", sender);
        }
        return Ok(());
    }

    let mut filter_config = FilterConfig::new().with_limit(args.limit);
    if !args.senders.is_empty() {
        filter_config = filter_config.with_senders(args.senders.iter().cloned());
    }
    if let Some(ref search) = args.search {
        filter_config = filter_config.with_search(search.clone());
    }

    let parsed = messages.len();
    let shown = apply_filters(messages, &filter_config);
    eprintln!("ℹ️  {}", FilterSummary::new(parsed, shown.len()));

    let format: OutputFormat = args.format.into();
    let output_config = if args.display {
        OutputConfig::new().with_display()
    } else {
        OutputConfig::new()
    };

    match args.output {
        Some(ref output_path) => {
            write_to_format(&shown, output_path, format, &output_config)?;
            eprintln!("✅ {} output saved to {}", format, output_path.display());
        }
        None => print!("{}", to_format_string(&shown, format, &output_config)?),
    }

    Ok(())
}
