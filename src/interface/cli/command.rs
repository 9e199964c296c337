//! CLI 명령 파싱 모듈.

use clap::{Parser, Subcommand};

use crate::domain::review::RunOptions;

#[derive(Debug, Parser)]
#[command(name = "pushreview")]
#[command(about = "Push changesets, then open a code review for them")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Push destination (path alias or URL)
    dest: Option<String>,

    /// Reviewer name or email; repeatable or comma-joined. "none" skips the review
    #[arg(long = "rr", value_name = "REVIEWER")]
    reviewers: Vec<String>,

    /// Revision to review instead of the outgoing changesets; repeatable
    #[arg(long = "rrev", value_name = "REV")]
    revs: Vec<String>,

    /// Review title
    #[arg(long = "rtitle", value_name = "TITLE")]
    title: Option<String>,

    /// Review description
    #[arg(long = "rcomment", value_name = "COMMENT")]
    comment: Option<String>,

    /// Write the review description in an editor
    #[arg(long = "reditor")]
    editor: bool,

    /// Extra arguments forwarded to `hg push` unchanged
    #[arg(last = true, value_name = "PUSH_ARGS")]
    push_args: Vec<String>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective merged config and whether the VCS command is available
    Config,
}

#[derive(Debug)]
pub enum CliAction {
    InspectConfig,
    PushReview(RunOptions),
}

impl Cli {
    /// 프로세스 인자를 파싱한다. 사용법 오류는 clap이 출력 후 종료 코드 2로 끝낸다.
    pub fn parse_action() -> CliAction {
        Cli::parse().into_action()
    }

    pub fn into_action(self) -> CliAction {
        match self.command {
            Some(Commands::Config) => CliAction::InspectConfig,
            None => CliAction::PushReview(RunOptions {
                dest: self.dest,
                reviewers: self.reviewers,
                revs: self.revs,
                title: self.title,
                comment: self.comment,
                editor: self.editor,
                push_args: self.push_args,
            }),
        }
    }
}
