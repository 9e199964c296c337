//! `hg` 명령행을 통한 VersionControl 구현.

use std::process::Stdio;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::application::ports::VersionControl;
use crate::domain::review::Changeset;

/// 해시와 JSON 인코딩된 설명을 한 줄에 출력하는 템플릿.
const CHANGESET_TEMPLATE: &str = "{node} {desc|json}\\n";

pub struct HgCli {
    program: String,
}

impl HgCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        // 사용자 alias/출력 설정의 영향을 받지 않도록 한다.
        cmd.env("HGPLAIN", "1");
        cmd
    }

    /// 명령을 실행하고 (종료 코드, stdout)을 돌려준다. `allowed` 밖의 코드는 오류다.
    async fn capture(&self, args: &[&str], allowed: &[i32]) -> Result<(i32, String)> {
        debug!(program = %self.program, ?args, "running hg");
        let output = self
            .command()
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await
            .with_context(|| format!("failed to run {} {}", self.program, args.join(" ")))?;

        let code = output.status.code().unwrap_or(-1);
        if !allowed.contains(&code) {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "{} {} exited with {}: {}",
                self.program,
                args.join(" "),
                output.status,
                stderr.trim()
            );
        }
        Ok((code, String::from_utf8_lossy(&output.stdout).to_string()))
    }
}

#[async_trait]
impl VersionControl for HgCli {
    async fn path_aliases(&self) -> Result<Vec<(String, String)>> {
        let (_, stdout) = self.capture(&["paths"], &[0]).await?;
        Ok(parse_paths(&stdout))
    }

    async fn expand_revisions(&self, specs: &[String]) -> Result<Vec<Changeset>> {
        let mut args = vec!["log"];
        for spec in specs {
            args.push("-r");
            args.push(spec);
        }
        args.extend(["--template", CHANGESET_TEMPLATE]);

        let (_, stdout) = self.capture(&args, &[0]).await?;
        parse_changesets(&stdout)
    }

    async fn outgoing(&self, dest: Option<&str>) -> Result<Vec<Changeset>> {
        let mut args = vec!["outgoing", "--quiet", "--template", CHANGESET_TEMPLATE];
        args.extend(dest);

        // 1 = 보낼 체인지셋 없음
        let (code, stdout) = self.capture(&args, &[0, 1]).await?;
        if code == 1 {
            return Ok(Vec::new());
        }
        parse_changesets(&stdout)
    }

    async fn push(&self, dest: Option<&str>, args: &[String]) -> Result<()> {
        let mut cmd = self.command();
        cmd.arg("push");
        cmd.args(dest);
        cmd.args(args);
        debug!(program = %self.program, ?dest, ?args, "running hg push");

        let status = cmd
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .with_context(|| format!("failed to run {} push", self.program))?;

        if !push_succeeded(status.code()) {
            bail!("{} push exited with {status}", self.program);
        }
        Ok(())
    }
}

/// `hg push`는 보낼 것이 없을 때 1을 돌려준다. 실패로 보지 않는다.
fn push_succeeded(code: Option<i32>) -> bool {
    matches!(code, Some(0) | Some(1))
}

/// `name = url` 줄 목록을 파싱한다.
fn parse_paths(stdout: &str) -> Vec<(String, String)> {
    stdout
        .lines()
        .filter_map(|line| line.split_once('='))
        .map(|(name, url)| (name.trim().to_string(), url.trim().to_string()))
        .filter(|(name, url)| !name.is_empty() && !url.is_empty())
        .collect()
}

fn parse_changesets(stdout: &str) -> Result<Vec<Changeset>> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let (hash, desc) = line
                .split_once(' ')
                .with_context(|| format!("unexpected hg output line: {line}"))?;
            let description: String = serde_json::from_str(desc)
                .with_context(|| format!("invalid description for {hash}"))?;
            Ok(Changeset {
                hash: hash.to_string(),
                description,
            })
        })
        .collect()
}
