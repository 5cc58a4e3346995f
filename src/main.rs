use std::fs::File;
use std::io::{
    self,
    BufWriter,
    Write
};
use std::path::PathBuf;

use anyhow::{
    Context,
    Result
};
use clap::{
    Parser,
    Subcommand
};
use tracing_subscriber::EnvFilter;

use findiff::configuration::Configuration;
use findiff::manager::functionmanager::FunctionManager;
use findiff::manager::manager::IManager;
use findiff::report::sweepreport::SweepReport;

#[derive(Parser)]
#[command(author, version, about = "Finite-difference derivative error sweeps", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run every configured case over the step-size sweep and emit the error curves as JSON
    Run {
        /// Study configuration (JSON); the built-in exp/cos demonstration when omitted
        #[arg(long)]
        config: Option<PathBuf>,

        /// Report destination; stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List the built-in evaluation functions
    Functions,
}

fn run(config: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let configuration = match &config {
        Some(path) => Configuration::from_reader(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => Configuration::demo(),
    };

    let functions = FunctionManager::new();
    let study = configuration.build_study(&functions)?;
    let outcomes = study.run();
    let report = SweepReport::new(
        study.sweep(),
        &outcomes,
        configuration.fallback_range(),
        configuration.fit_window(),
    );

    for case in report.cases() {
        match case.error() {
            Some(_) => tracing::warn!("{}", case.summary()),
            None => tracing::info!("{}", case.summary()),
        }
    }

    match &output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            report.to_writer(&mut writer)?;
            writer.flush()?;
            tracing::info!("report written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            report.to_writer(&mut handle)?;
            writeln!(handle)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run { config, output } => run(config, output)?,
        Command::Functions => {
            for name in FunctionManager::new().names() {
                println!("{}", name);
            }
        }
    }
    Ok(())
}
