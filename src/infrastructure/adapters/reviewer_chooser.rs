//! 리뷰어 선택 입력 포트 구현 어댑터.

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};

use crate::application::ports::ReviewerChooser;
use crate::domain::review::Person;

/// 번호 목록을 보여주고 stdin에서 1부터 시작하는 번호를 읽는다.
/// 범위 안의 번호가 들어올 때까지 다시 묻는다. 기본값/타임아웃은 없다.
pub struct StdinChooser;

impl ReviewerChooser for StdinChooser {
    fn choose(&self, token: &str, candidates: &[Person]) -> Result<usize> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut out = io::stderr();
        prompt_choice(token, candidates, &mut input, &mut out)
    }
}

fn prompt_choice(
    token: &str,
    candidates: &[Person],
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<usize> {
    writeln!(out, "\nHmm...There are a few folks matching \"{token}\"")?;
    for (i, person) in candidates.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, person.label())?;
    }

    loop {
        write!(out, "Which \"{token}\" did you mean? [1-{}]: ", candidates.len())?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("no reviewer chosen for \"{token}\" (stdin closed)");
        }

        match line.trim().parse::<usize>() {
            Ok(n) if (1..=candidates.len()).contains(&n) => return Ok(n - 1),
            _ => writeln!(out, "unrecognized response")?,
        }
    }
}
