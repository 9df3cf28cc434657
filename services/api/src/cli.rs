use crate::server;
use clap::{Args, Parser, Subcommand};
use corecomply::config::AppConfig;
use corecomply::error::AppError;
use corecomply::jobs::JobRunner;
use corecomply::telemetry;
use corecomply::tokens::{TokenExport, VariablesDocument};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "CoreComply",
    about = "Serve and operate the CoreComply compliance platform",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect or trigger scheduled background jobs
    Jobs {
        #[command(subcommand)]
        command: JobsCommand,
    },
    /// Design token utilities
    Tokens {
        #[command(subcommand)]
        command: TokensCommand,
    },
}

#[derive(Subcommand, Debug)]
enum JobsCommand {
    /// List registered jobs
    List,
    /// Run a single job once and exit
    Run {
        /// Job name as shown by `jobs list`
        name: String,
    },
}

#[derive(Subcommand, Debug)]
enum TokensCommand {
    /// Flatten exported variable collections into JSON and CSS token files
    Export(TokenExportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Load the catalog from a JSON file instead of the built-in demo data
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct TokenExportArgs {
    /// Variable collections JSON document
    #[arg(long)]
    input: PathBuf,
    /// Destination for the flat JSON token map
    #[arg(long, default_value = "tokens.json")]
    json_out: PathBuf,
    /// Destination for the CSS custom properties
    #[arg(long, default_value = "tokens.css")]
    css_out: PathBuf,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Jobs {
            command: JobsCommand::List,
        } => {
            list_jobs(&JobRunner::standard());
            Ok(())
        }
        Command::Jobs {
            command: JobsCommand::Run { name },
        } => run_job(&name).await,
        Command::Tokens {
            command: TokensCommand::Export(args),
        } => export_tokens(args),
    }
}

fn list_jobs(runner: &JobRunner) {
    println!("Scheduled jobs");
    for job in runner.jobs() {
        println!("- {}: {}", job.name(), job.description());
    }
}

async fn run_job(name: &str) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    JobRunner::standard().run_once(name).await?;
    println!("Job '{name}' completed");
    Ok(())
}

fn export_tokens(args: TokenExportArgs) -> Result<(), AppError> {
    let TokenExportArgs {
        input,
        json_out,
        css_out,
    } = args;

    let document = VariablesDocument::from_reader(BufReader::new(File::open(&input)?))?;
    let export = TokenExport::from_collections(&document.collections)?;
    export.write_files(&json_out, &css_out)?;

    println!(
        "Exported {} tokens to {} and {}",
        export.len(),
        json_out.display(),
        css_out.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["corecomply-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_job_run_and_token_export() {
        let cli = Cli::try_parse_from(["corecomply-api", "jobs", "run", "risk-score-recompute"])
            .expect("parses");
        assert!(matches!(
            cli.command,
            Some(Command::Jobs { command: JobsCommand::Run { ref name } }) if name == "risk-score-recompute"
        ));

        let cli = Cli::try_parse_from([
            "corecomply-api",
            "tokens",
            "export",
            "--input",
            "variables.json",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Tokens {
                command: TokensCommand::Export(args),
            }) => {
                assert_eq!(args.input, PathBuf::from("variables.json"));
                assert_eq!(args.css_out, PathBuf::from("tokens.css"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
