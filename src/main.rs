//! `pushreview` 바이너리 진입점.

use pushreview::domain::error::ReviewError;
use pushreview::domain::review::PushReviewOutcome;
use pushreview::interface::cli::{AppComposition, Cli, CliAction};

/// 전처리 단계에서 중단된 경우의 종료 코드
const ABORT_EXIT_CODE: i32 = 255;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let action = Cli::parse_action();
    let composition = AppComposition::default();

    match action {
        CliAction::InspectConfig => match composition.inspect_config_usecase().execute() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err:#}");
                std::process::exit(ABORT_EXIT_CODE);
            }
        },
        CliAction::PushReview(options) => {
            let code = match composition.push_review_usecase().execute(options).await {
                Ok(outcome) => {
                    if let PushReviewOutcome::Bypassed = outcome {
                        println!("review bypassed; changesets pushed");
                    }
                    outcome.exit_code()
                }
                Err(err) => report_error(&err),
            };
            std::process::exit(code);
        }
    }
}

fn report_error(err: &ReviewError) -> i32 {
    match err.remediation() {
        Some(text) => {
            eprintln!("{text}");
            0
        }
        None => {
            eprintln!("abort: {err}");
            ABORT_EXIT_CODE
        }
    }
}
