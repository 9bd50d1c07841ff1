use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Args, Parser, Subcommand};
use engine::{BudgetState, import};

use crate::error::{ReportError, Result};

mod error;
mod report;

#[derive(Parser, Debug)]
#[command(name = "limoneta_report")]
#[command(about = "Headless 50/30/20 budget reports from tab-delimited expense files")]
struct Cli {
    /// Log level for stderr diagnostics (also read from `LIMONETA_LOG`).
    #[arg(long, env = "LIMONETA_LOG", default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print budgets, spending and advice for an import file.
    Summary(SummaryArgs),
    /// Print an example import file.
    Template,
    /// Re-emit the valid lines of an import file in canonical form.
    Export(InputArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Import file (`Category<TAB>Name<TAB>Amount` per line); `-` or nothing reads stdin.
    file: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SummaryArgs {
    /// Monthly income, parsed like the income field of the app.
    #[arg(long, allow_hyphen_values = true)]
    income: String,
    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,
    /// Also list the lines that were skipped.
    #[arg(long)]
    skipped: bool,
    #[command(flatten)]
    input: InputArgs,
}

fn init_logging(level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(format!("limoneta_report={level},engine={level}"))
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| ReportError::Logging(err.to_string()))
}

fn read_input(input: &InputArgs) -> Result<String> {
    match input.file.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            fs::read_to_string(path).map_err(|source| ReportError::Read {
                path: path.display().to_string(),
                source,
            })
        }
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Summary(args) => {
            let text = read_input(&args.input)?;
            let (batch, import_report) = import::parse_with_report(&text);
            tracing::info!(
                imported = import_report.imported,
                skipped = import_report.skipped_count(),
                "parsed input"
            );

            let mut state = BudgetState::new();
            state.set_income(&args.income);
            state.merge(batch);
            let summary = state.summary();

            if args.json {
                println!("{}", report::render_json(&summary, &import_report)?);
            } else {
                print!("{}", report::render_text(&summary));
                if args.skipped {
                    println!();
                    print!("{}", report::render_skipped(&import_report));
                }
            }
        }
        Command::Template => println!("{}", import::TEMPLATE),
        Command::Export(args) => {
            let text = read_input(&args)?;
            let batch = import::parse(&text);
            print!("{}", import::export_tsv(&batch)?);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = init_logging(&cli.log_level) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
