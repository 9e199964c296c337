//! 설정 모듈 공용 유틸리티.

use std::env;
use std::path::Path;

/// VCS 실행 파일이 PATH(또는 주어진 경로)에 있는지 확인한다.
pub fn command_exists(command: &str) -> bool {
    let command = command.trim();
    if command.is_empty() {
        return false;
    }

    let as_path = Path::new(command);
    if as_path.components().count() > 1 {
        return as_path.is_file();
    }

    let candidates = executable_names(command);
    env::var_os("PATH")
        .map(|path_var| {
            env::split_paths(&path_var)
                .any(|dir| candidates.iter().any(|name| dir.join(name).is_file()))
        })
        .unwrap_or(false)
}

#[cfg(windows)]
fn executable_names(command: &str) -> Vec<String> {
    // 확장자가 없으면 hg.exe/hg.bat 등도 찾는다.
    let mut names = vec![command.to_string()];
    if Path::new(command).extension().is_none() {
        names.extend([".exe", ".bat", ".cmd"].iter().map(|ext| format!("{command}{ext}")));
    }
    names
}

#[cfg(not(windows))]
fn executable_names(command: &str) -> Vec<String> {
    vec![command.to_string()]
}
