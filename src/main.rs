use std::{fs::OpenOptions, io::Write, path::PathBuf, process::ExitCode};

use clap::Parser;
use log::{error, info, Level, LevelFilter};
use word_locator::{analyzer::Analyzer, report::ReportFormat};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the text document to scan
    #[arg(long, default_value = "input.txt")]
    text_file: PathBuf,

    /// Path to the whitespace-delimited keyword list
    #[arg(long, default_value = "keywords.txt")]
    keywords_file: PathBuf,

    /// Path the report is written to (overwritten)
    #[arg(long, default_value = "output.txt")]
    output_file: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Appends timestamped run log lines to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enables debug logging
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

fn init_logger(args: &Args) -> std::io::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env();

    if let Some(log_file) = &args.log_file {
        let file = OpenOptions::new().create(true).append(true).open(log_file)?;

        builder
            .target(env_logger::Target::Pipe(Box::new(file)))
            .format(|buf, record| {
                let level = match record.level() {
                    Level::Error => "ERROR",
                    Level::Warn => "WARNING",
                    Level::Info => "INFO",
                    Level::Debug | Level::Trace => "DEBUG",
                };
                writeln!(buf, "[{}] [{level}] {}", buf.timestamp_seconds(), record.args())
            });
    }

    builder.init();

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logger(&args) {
        eprintln!("Failed to open log file: {e}");
        return ExitCode::FAILURE;
    }

    info!("Application started");

    let result = Analyzer::new().with_format(args.format).run(
        &args.text_file,
        &args.keywords_file,
        &args.output_file,
    );

    let exit_code = match result {
        Ok(summary) => {
            println!("Analysis completed successfully!");
            println!(
                "{} unique words, {} occurrences across {} lines ({} keywords excluded)",
                summary.unique_words, summary.occurrences, summary.lines, summary.keywords
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    };

    info!("Application closed");

    exit_code
}
