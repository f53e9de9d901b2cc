mod render;


use std::process::ExitCode;

use advice::{AnswerResult, AskError, Outcome, Query, ResultView};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Ask(#[from] AskError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("health check failed: HTTP {0}")]
    HealthCheck(u16),
}

#[derive(Parser, Debug)]
#[command(name = "advisor-cli", about = "Ask the agri advisor from a terminal")]
struct Cli {
    #[arg(long, env = "ADVISOR_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the host is up.
    Ping,
    /// Submit a question and print the answer.
    Ask(AskArgs),
}

#[derive(Args, Debug)]
struct AskArgs {
    #[arg(long = "q", help = "Your question")]
    question: String,

    #[arg(long, default_value = "")]
    district: String,

    #[arg(long, default_value = "")]
    crop: String,

    #[arg(long, default_value = advice::DEFAULT_LANG)]
    lang: String,

    #[arg(long, default_value_t = false, help = "Print the raw response JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let base_url = cli.base_url.trim_end_matches('/');

    let result = match cli.command {
        Command::Ping => run_ping(base_url).await,
        Command::Ask(args) => run_ask(base_url, args).await,
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_line(&err));
            ExitCode::FAILURE
        }
    }
}

/// User-facing error text: the `Display` form, never `Debug`.
fn error_line(err: &CliError) -> String {
    err.to_string()
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let response = reqwest::get(format!("{base_url}/healthz")).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::HealthCheck(status.as_u16()));
    }
    println!("ok");
    Ok(())
}

async fn run_ask(base_url: &str, args: AskArgs) -> Result<(), CliError> {
    let query = Query::new(args.question)
        .with_district(&args.district)
        .with_crop(&args.crop)
        .with_lang(&args.lang);

    let body = post_query(base_url, &query).await?;
    if args.json {
        let value = serde_json::from_str::<Value>(&body)?;
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let answer = serde_json::from_str::<AnswerResult>(&body)?;
    let followups = answer.followups.clone();
    let mut view = ResultView::default();
    view.apply(Outcome::Success(answer));
    print!("{}", render::render_answer(&view, &followups));
    Ok(())
}

/// Post one query and return the raw success body. No retry.
async fn post_query(base_url: &str, query: &Query) -> Result<String, CliError> {
    let url = format!("{base_url}{}", advice::ASK_PATH);
    let response = reqwest::Client::new().post(url).json(query).send().await?;
    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        return Err(AskError::from_status(status.as_u16(), text).into());
    }
    Ok(text)
}
