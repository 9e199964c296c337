//! 리뷰 설명 에디터 포트 구현 어댑터.

use std::env;
use std::fs;
use std::io::Write;
use std::process::Command;

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::application::ports::DescriptionEditor;

/// 임시 파일에 버퍼를 쓰고 사용자의 에디터를 띄운 뒤 결과를 읽는다.
pub struct ExternalEditor;

impl DescriptionEditor for ExternalEditor {
    fn edit(&self, buffer: &str) -> Result<String> {
        let editor = editor_command(|name| env::var(name).ok());

        let mut file = tempfile::Builder::new()
            .prefix("pushreview-")
            .suffix(".txt")
            .tempfile()
            .context("failed to create temp file for review description")?;
        file.write_all(buffer.as_bytes())?;
        file.flush()?;

        debug!(%editor, path = %file.path().display(), "launching editor");
        // EDITOR 값에 인자가 포함될 수 있어 셸을 거친다(예: "code --wait").
        let status = shell_command(&editor, &file.path().display().to_string())
            .status()
            .with_context(|| format!("failed to launch editor: {editor}"))?;
        if !status.success() {
            bail!("editor exited with {status}");
        }

        fs::read_to_string(file.path()).context("failed to read edited review description")
    }
}

/// HGEDITOR > VISUAL > EDITOR > vi
fn editor_command(lookup: impl Fn(&str) -> Option<String>) -> String {
    ["HGEDITOR", "VISUAL", "EDITOR"]
        .iter()
        .filter_map(|name| lookup(name))
        .find(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "vi".to_string())
}

#[cfg(not(windows))]
fn shell_command(editor: &str, path: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(format!("{editor} \"$1\"")).arg("sh").arg(path);
    cmd
}

#[cfg(windows)]
fn shell_command(editor: &str, path: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(format!("{editor} \"{path}\""));
    cmd
}
