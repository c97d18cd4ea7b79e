use clap::{Parser, ValueEnum};
use std::path::Path;
use std::process;
use std::time::{Duration, Instant};

use symptom_doctor::config::Config;
use symptom_doctor::engine::{self, EngineResult};
use symptom_doctor::prompt;
use symptom_doctor::reporter::{self, cli::CliReporter, json::JsonReporter, Reporter};
use symptom_doctor::session::FormSession;
use symptom_doctor::severity::Severity;

#[derive(Parser)]
#[command(name = "symptom-doctor", version, about = "Check your symptoms")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "cli")]
    format: Format,

    /// Only output the diagnosis and confidence
    #[arg(long)]
    score: bool,

    /// Answer a symptom without the interactive form (repeatable),
    /// e.g. --answer fever=moderate
    #[arg(long = "answer", value_name = "SYMPTOM=SEVERITY")]
    answers: Vec<String>,

    /// Override the artificial submit delay in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Show per-symptom weights and timing
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Cli,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let mut config = match Config::load(Path::new(".")) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    if let Some(delay_ms) = cli.delay_ms {
        config.submit.delay_ms = delay_ms;
    }

    let started = Instant::now();
    let outcome = if cli.answers.is_empty() {
        run_interactive(&config)
    } else {
        run_with_answers(&cli.answers, &config)
    };
    let result = match outcome {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    let elapsed = started.elapsed();

    if cli.score {
        print!("{}", reporter::score_only(&result.assessment));
    } else {
        let reporter: Box<dyn Reporter> = match cli.format {
            Format::Cli => Box::new(CliReporter),
            Format::Json => Box::new(JsonReporter),
        };
        print!("{}", reporter.format(&result, cli.verbose, elapsed));
    }

    if result.fail_on_positive && result.assessment.diagnosis {
        process::exit(2);
    }
}

fn run_with_answers(raw: &[String], config: &Config) -> Result<EngineResult, String> {
    let answers = raw
        .iter()
        .map(|r| parse_answer(r))
        .collect::<Result<Vec<_>, _>>()?;
    engine::run(&answers, config)
}

fn run_interactive(config: &Config) -> Result<EngineResult, String> {
    let mut session = FormSession::new(Duration::from_millis(config.submit.delay_ms));
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    prompt::run(&mut stdin.lock(), &mut stdout.lock(), &mut session)?;
    Ok(engine::finish(&session, config))
}

fn parse_answer(raw: &str) -> Result<(String, Severity), String> {
    let (id, severity) = raw
        .split_once('=')
        .ok_or_else(|| format!("Invalid --answer \"{raw}\" (expected symptom=severity)"))?;
    let severity: Severity = severity.trim().parse()?;
    Ok((id.trim().to_string(), severity))
}
