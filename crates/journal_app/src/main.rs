mod cli;
mod progress;
mod settings;
mod summary;

use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use journal_engine::{check_tools, PipelineError, PipelineRunner, ProcessEncoder, RunOutcome};
use journal_logging::journal_info;

use crate::cli::Cli;
use crate::progress::StatusLine;
use crate::settings::load_settings;
use crate::summary::render_summary;

fn print_usage() {
    println!("---------------------------------------------------------");
    println!("📘 GUÍA DE USO:");
    println!("  Normal:      journal-export -o Salida 'Entry 1.html'");
    println!("  Solo MD:     journal-export -o Salida -t 'Entry 1.html'");
    println!("  Todo:        journal-export -o Salida all");
    println!("---------------------------------------------------------");
    let _ = Cli::command().print_help();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    if cli.filters.is_empty() {
        print_usage();
        return ExitCode::SUCCESS;
    }

    journal_logging::initialize_cli(cli.log_level(), cli.log_file.as_deref());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❌ {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = load_settings(cli.config.as_deref())?;
    let config = cli.run_config(&settings);

    if !config.entries_root.is_dir() {
        return Err(PipelineError::EntriesDirMissing(config.entries_root.clone()).into());
    }
    if !config.text_only {
        check_tools(&settings.encoder)
            .context("ImageMagick and ffmpeg are required (or use -t for text only)")?;
    }

    let runner = PipelineRunner::new(config, Box::new(ProcessEncoder::new(settings.encoder)));
    let status = StatusLine::for_level(cli.log_level());
    let outcome = runner.run(&status);
    status.finish();

    match outcome.context("Error inesperado")? {
        RunOutcome::NoMatchingEntries => {
            println!("❌ No encontré archivos que coincidan.");
        }
        RunOutcome::Completed(report) => {
            journal_info!(
                "Exported {} entries to {:?}",
                report.entries_processed,
                report.output_path
            );
            println!();
            print!("{}", render_summary(&report));
        }
    }
    Ok(())
}
