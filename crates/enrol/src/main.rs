use std::fs::File;
use std::io::{BufReader, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use enrol_config::{get_config_path, Config};
use enrol_output::*;
use enrol_service::RegistrationService;
use enrol_store::{MemoryStorage, Storage};
use enrol_types::*;
use fastrace::collector::Config as FastraceConfig;
use fastrace::prelude::*;
use tracing::debug;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

mod input;
mod profiling;

use profiling::{format_profiling, CollectingReporter};

const MAIN_HELP: &str = r#"Enrol validates user registrations against a fixed set of rules: login,
password and age must be present, the password must be long enough, the user
must be old enough, and the login must not already be taken.

`enrol register` reads candidates as JSON lines (one object per line with
`login`, `password` and `age` keys) and registers them in order, so a later
candidate with an already-accepted login is rejected.

Thresholds come from ~/.config/enrol/config.toml, see `enrol config`."#;

#[derive(Parser)]
#[command(name = "enrol")]
#[command(about = MAIN_HELP)]
#[command(version)]
struct Cli {
    #[arg(long, global = true, help = "Output as JSON")]
    json: bool,

    #[arg(long, global = true, env = "ENROL_CONFIG", help = "Path to config file")]
    config: Option<PathBuf>,

    #[arg(long, global = true, help = "Print timing information for profiling")]
    profile: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Register candidates read as JSON lines from a file or stdin.")]
    Register {
        #[arg(help = "Input file (reads stdin when omitted)")]
        file: Option<PathBuf>,
    },

    #[command(about = "Check a single candidate against an empty store.")]
    Check {
        #[arg(short = 'l', long, help = "Login")]
        login: Option<String>,
        #[arg(short = 'p', long, help = "Password")]
        password: Option<String>,
        #[arg(short = 'a', long, allow_negative_numbers = true, help = "Age")]
        age: Option<i32>,
    },

    #[command(about = "Print the effective configuration.")]
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(get_config_path);
    let config = Config::load_from(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    init_logging(&config)?;
    debug!(path = %config_path.display(), "loaded config");

    let service = RegistrationService::new(config.rules);

    let collector = if cli.profile {
        let (reporter, collector) = CollectingReporter::new();
        fastrace::set_reporter(reporter, FastraceConfig::default());
        Some(collector)
    } else {
        None
    };

    let result = {
        let root = if collector.is_some() {
            Span::root("enrol", SpanContext::random())
        } else {
            Span::noop()
        };
        let _guard = root.set_local_parent();
        run(cli, &config, &config_path, &service)
    };

    if let Some(collector) = collector {
        fastrace::flush();
        eprintln!("\n{}", format_profiling(&collector.function_stats()));
    }

    result
}

fn run(cli: Cli, config: &Config, config_path: &std::path::Path, service: &RegistrationService) -> Result<ExitCode> {
    match cli.command {
        Commands::Register { file } => {
            handle_register(service, cli.json, file)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check {
            login,
            password,
            age,
        } => {
            let candidate = User {
                login,
                password,
                age,
            };
            if handle_check(service, cli.json, candidate)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Config => {
            handle_config(config, config_path)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_logging(config: &Config) -> Result<()> {
    let directive: Directive = config
        .logging
        .log_level
        .parse()
        .with_context(|| format!("invalid log level: {}", config.logging.log_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
    Ok(())
}

fn register_batch(service: &RegistrationService, candidates: Vec<User>) -> BatchReport {
    let mut storage = MemoryStorage::new();
    let outcomes = candidates
        .into_iter()
        .map(|candidate| {
            let login = candidate.login.clone();
            let result = service.register(&mut storage, candidate);
            Outcome::from_result(login.as_deref(), &result)
        })
        .collect();

    BatchReport {
        outcomes,
        records: storage.records().iter().map(UserSummary::from).collect(),
    }
}

fn handle_register(service: &RegistrationService, json_output: bool, file: Option<PathBuf>) -> Result<()> {
    let candidates = match file {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("failed to open {}", path.display()))?;
            input::read_candidates(BufReader::new(file))?
        }
        None => {
            let stdin = std::io::stdin();
            if stdin.is_terminal() {
                bail!("no input file given and stdin is a terminal");
            }
            input::read_candidates(stdin.lock())?
        }
    };

    let report = register_batch(service, candidates);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", format_batch_report(&report));
    }
    Ok(())
}

/// Prints the outcome and returns whether the candidate would be accepted.
fn handle_check(service: &RegistrationService, json_output: bool, candidate: User) -> Result<bool> {
    let storage = MemoryStorage::new();
    let result = service.validate(&storage, &candidate).map(|_| candidate.clone());
    let outcome = Outcome::from_result(candidate.login(), &result);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", format_outcome(&outcome));
    }
    Ok(outcome.is_accepted())
}

fn handle_config(config: &Config, config_path: &std::path::Path) -> Result<()> {
    println!("Config file: {}", config_path.display());
    if !config_path.exists() {
        println!("(file does not exist, using defaults)");
    }
    println!();
    print!("{}", config.to_toml()?);
    Ok(())
}
