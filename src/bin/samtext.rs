//! Command-line interface for samtext
//! This binary is used to inspect, check and convert SAM text files.
//!
//! Usage:
//!   samtext view `<path>` [--qname `<regex>`]     - Print a header summary, statistics and the first records
//!   samtext execute `<path>` [--format `<fmt>`]   - Process a file and output to stdout
//!   samtext validate `<path>`                   - Report semantic problems in a file
//!   samtext list-formats                        - List all available output formats
//!
//! A TOML file passed with `--config` is layered over the built-in defaults.

use clap::{Arg, ArgMatches, Command};
use env_logger::Env;
use regex::Regex;
use samtext::sam::config::{Loader, SamtextConfig};
use samtext::sam::io::read_sam_file;
use samtext::sam::processor::{available_formats, process_file, OutputFormat};
use samtext::sam::stats::{describe_flags, summarize};
use samtext::sam::validate::validate;
use samtext::{format_alignment, SamFile};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let matches = Command::new("samtext")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and processing SAM text files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML file layered over the built-in defaults"),
        )
        .subcommand(
            Command::new("view")
                .about("Print a header summary, statistics and the first alignments")
                .arg(
                    Arg::new("path")
                        .help("Path to the SAM file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("qname")
                        .long("qname")
                        .short('q')
                        .help("Only show alignments whose QNAME matches this regex"),
                ),
        )
        .subcommand(
            Command::new("execute")
                .about("Process a file and output to stdout")
                .arg(
                    Arg::new("path")
                        .help("Path to the SAM file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (default: output.default_format from the config)"),
                ),
        )
        .subcommand(
            Command::new("validate")
                .about("Check a file against the SAM field rules")
                .arg(
                    Arg::new("path")
                        .help("Path to the SAM file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("list-formats").about("List all available output formats"))
        .get_matches();

    let config = load_config(&matches);

    match matches.subcommand() {
        Some(("view", view_matches)) => {
            let path = required(view_matches, "path");
            let qname = view_matches.get_one::<String>("qname").map(String::as_str);
            handle_view_command(path, qname, &config);
        }
        Some(("execute", execute_matches)) => {
            let path = required(execute_matches, "path");
            let format = execute_matches
                .get_one::<String>("format")
                .unwrap_or(&config.output.default_format);
            handle_execute_command(path, format);
        }
        Some(("validate", validate_matches)) => {
            handle_validate_command(required(validate_matches, "path"));
        }
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => {
            eprintln!("Error: a subcommand is required");
            std::process::exit(1);
        }
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    match matches.get_one::<String>(name) {
        Some(value) => value,
        None => fail(format!("missing argument <{}>", name)),
    }
}

fn load_config(matches: &ArgMatches) -> SamtextConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        log::debug!("layering config file {}", path);
        loader = loader.with_file(path);
    }
    loader.build().unwrap_or_else(|e| fail(e))
}

fn load(path: &str) -> SamFile {
    read_sam_file(path).unwrap_or_else(|e| fail(e))
}

/// Handle the view command
fn handle_view_command(path: &str, qname: Option<&str>, config: &SamtextConfig) {
    let filter = qname.map(|pattern| {
        Regex::new(pattern).unwrap_or_else(|e| fail(format!("invalid --qname pattern: {}", e)))
    });
    let file = load(path);
    let report = &config.report;

    if report.show_header {
        let header = &file.header;
        println!("== header");
        println!("version: {}", header.version().unwrap_or("-"));
        println!("sorting order: {}", header.sorting_order().as_str());
        for name in header.reference_names() {
            match header.reference_length(name) {
                Some(length) => println!("  @SQ {} ({} bp)", name, length),
                None => println!("  @SQ {}", name),
            }
        }
        for comment in &header.co {
            println!("  @CO {}", comment);
        }
        println!();
    }

    println!("== statistics");
    print!("{}", summarize(&file));
    println!();

    let selected: Vec<_> = file
        .alignments
        .iter()
        .filter(|alignment| {
            filter
                .as_ref()
                .map_or(true, |regex| regex.is_match(&alignment.qname))
        })
        .collect();
    println!(
        "== alignments ({} of {} shown)",
        selected.len().min(report.max_alignments),
        selected.len()
    );
    for alignment in selected.into_iter().take(report.max_alignments) {
        println!("{}", format_alignment(alignment));
        if report.show_flags {
            for description in describe_flags(alignment.flag) {
                println!("    flag: {}", description);
            }
        }
        if report.show_tags {
            for tag in &alignment.tags {
                println!("    tag {} ({}): {}", tag.tag(), tag.tag_type(), tag.value());
            }
        }
    }
}

/// Handle the execute command
fn handle_execute_command(path: &str, format: &str) {
    let format = match format.parse::<OutputFormat>() {
        Ok(format) => format,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("\nAvailable formats:");
            for format in available_formats() {
                eprintln!("  {}", format);
            }
            std::process::exit(1);
        }
    };
    match process_file(path, format) {
        Ok(output) => print!("{}", output),
        Err(e) => fail(e),
    }
}

/// Handle the validate command
fn handle_validate_command(path: &str) {
    let file = load(path);
    let issues = validate(&file);
    if issues.is_empty() {
        println!("{}: no issues found", path);
        return;
    }
    for issue in &issues {
        log::warn!("{}", issue);
        println!("{}", issue);
    }
    eprintln!("{}: {} issues", path, issues.len());
    std::process::exit(1);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:");
    for format in available_formats() {
        println!("  {}", format);
    }
}
