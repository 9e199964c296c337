//! 콘솔 리포터 포트 구현 어댑터.

use std::io::{self, IsTerminal};

use crate::application::ports::Reporter;

/// 콘솔 전용 리포터 어댑터. 경고는 stderr로 보낸다.
pub struct ConsoleReporter {
    color: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    /// stderr가 TTY일 때만 경고를 색칠한다.
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn section(&self, name: &str) {
        println!();
        println!("==================== {} ====================", name);
    }

    fn kv(&self, key: &str, value: &str) {
        println!("{:<12}: {}", key, value);
    }

    fn status(&self, scope: &str, message: &str) {
        println!("[{:<8}] {}", scope, message);
    }

    fn warn(&self, message: &str) {
        if self.color {
            eprintln!("\x1b[31m{message}\x1b[0m");
        } else {
            eprintln!("{message}");
        }
    }

    fn raw(&self, line: &str) {
        println!("{}", line);
    }
}
