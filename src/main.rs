// Sat Oct 17 2026 - Alex

use anyhow::Context;
use clap::{ArgAction, Parser};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use sdk_offset_resolver::{
    config::Config,
    output::{ReportGenerator, Resolution},
    ui::Banner,
    utils::{format_duration, pluralize, LoggingUtils},
    OffsetResolver,
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version)]
#[command(about = "Resolves class field offsets and sizes from SDK dumps", long_about = None)]
struct Args {
    /// Lookup requests [default: neededOffsets.json]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Resolved offsets [default: offsets.json]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory holding the <file>.json SDK dumps [default: SDK]
    #[arg(short, long)]
    sdk_dir: Option<PathBuf>,

    /// JSON config file; flags given on the command line override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    indent: Option<usize>,

    /// Also write a summary report (.md for markdown, anything else plain text)
    #[arg(long)]
    text_output: Option<PathBuf>,

    /// Leave unresolved requests out of the report
    #[arg(long)]
    resolved_only: bool,

    /// -v info, -vv debug, -vvv trace; overrides --log-level
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[arg(long, default_value = "warn")]
    log_level: String,

    #[arg(long)]
    no_progress: bool,

    #[arg(long)]
    no_banner: bool,

    /// One-line banner instead of the boxed one
    #[arg(long)]
    compact_banner: bool,

    #[arg(long)]
    no_color: bool,
}

fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    LoggingUtils::init(LoggingUtils::level_for(args.verbose, &args.log_level), !args.no_color);

    if let Err(e) = run(&args) {
        eprintln!("{} {}", "[!]".red(), e);
        for cause in e.chain().skip(1) {
            eprintln!("    {} {}", "caused by:".dimmed(), cause);
        }
        std::process::exit(1);
    }
}

fn build_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(dir) = &args.sdk_dir {
        config = config.with_sdk_dir(dir.clone());
    }
    if let Some(input) = &args.input {
        config = config.with_input_file(input.clone());
    }
    if let Some(output) = &args.output {
        config = config.with_output_file(output.clone());
    }
    if let Some(indent) = args.indent {
        config = config.with_indent_size(indent);
    }
    if let Some(report) = &args.text_output {
        config = config.with_text_report(report.clone());
    }
    if args.resolved_only {
        config = config.with_report_unresolved(false);
    }
    if args.no_progress {
        config = config.with_progress_bars(false);
    }

    config.validate()?;
    Ok(config)
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = build_config(args)?;

    if !args.no_banner {
        Banner::resolver()
            .with_compact(args.compact_banner)
            .with_color(!args.no_color)
            .print();
        println!();
    }

    let start_time = Instant::now();
    let mut resolver = OffsetResolver::from_config(&config);

    println!("{} Reading requests: {}", "[*]".blue(), config.input_file.display());
    let requests = resolver.read_requests(&config.input_file)?;
    println!("{} {} loaded", "[+]".green(), pluralize(requests.len(), "request", "requests"));

    let progress = if config.enable_progress_bars && !requests.is_empty() {
        let pb = ProgressBar::new(requests.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let resolution = resolver.resolve_with_progress(&requests, |_, request| {
        if let Some(pb) = &progress {
            pb.set_message(request.class.clone());
            pb.inc(1);
        }
    });
    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }
    let resolution = resolution?;

    resolver.write(&resolution, &config.output_file)?;
    println!(
        "{} Wrote {} to {}",
        "[+]".green(),
        pluralize(resolution.resolved_count(), "entry", "entries"),
        config.output_file.display()
    );

    if let Some(path) = &config.text_report {
        ReportGenerator::from_config(&config, path).generate_to_file(&resolution, path)?;
        println!("{} Report saved to {}", "[+]".green(), path.display());
    }

    let stats = resolver.cache_stats();
    resolver.clear_cache();

    println!();
    print_unresolved(&resolution);
    println!(
        "{} Done in {} ({} loaded, {} cache hits)",
        "[*]".blue(),
        format_duration(start_time.elapsed()),
        pluralize(stats.loads, "document", "documents"),
        stats.hits
    );
    log::info!(
        "{} resolved, {} unresolved",
        resolution.resolved_count(),
        resolution.unresolved_count()
    );

    Ok(())
}

fn print_unresolved(resolution: &Resolution) {
    if resolution.unresolved.is_empty() {
        return;
    }

    println!(
        "{} {} not found:",
        "[!]".yellow(),
        pluralize(resolution.unresolved_count(), "request", "requests")
    );
    for request in &resolution.unresolved {
        println!("    {}", request.to_string().dimmed());
    }
    println!();
}
