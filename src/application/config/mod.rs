//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수/프로세스 접근은 `infrastructure`에서만 수행한다.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::error::ReviewError;

pub const DEFAULT_VCS_COMMAND: &str = "hg";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 리뷰 서비스 접속 정보
    #[serde(default)]
    pub service: ServiceConfig,
    /// push 대상 별칭 → URL (VCS 자체 paths 위에 덮어씀)
    #[serde(default)]
    pub paths: BTreeMap<String, String>,
    /// VCS 실행 설정
    #[serde(default)]
    pub vcs: VcsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServiceConfig {
    /// 서비스 URL 접두사(예: https://team.kilnhg.com)
    pub prefix: Option<String>,
    pub username: Option<String>,
    /// 고정 비밀번호(민감정보: 권장하지 않음)
    pub password: Option<String>,
    /// 비밀번호를 읽을 환경변수 이름
    pub password_env: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct VcsConfig {
    /// 실행할 VCS 명령(기본 hg)
    pub command: Option<String>,
}

/// 검증이 끝난 필수 서비스 설정 3종.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub prefix: String,
    pub username: String,
    pub password: String,
}

impl Config {
    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        self.service.merge_from(other.service);
        self.paths.extend(other.paths);
        if other.vcs.command.is_some() {
            self.vcs.command = other.vcs.command;
        }
    }

    /// 필수 설정을 검증한다. 비밀번호는 인프라 계층에서 해석된 값을 받는다.
    pub fn service_settings(&self, password: Option<String>) -> Result<ServiceSettings, ReviewError> {
        let mut missing = Vec::new();

        let prefix = present(self.service.prefix.as_deref());
        match prefix {
            None => missing.push("service.prefix".to_string()),
            Some(raw) if !is_http_url(raw) => {
                missing.push(format!("service.prefix (not an http(s) URL: {raw})"))
            }
            Some(_) => {}
        }

        let username = present(self.service.username.as_deref());
        if username.is_none() {
            missing.push("service.username".to_string());
        }

        let password = password.filter(|p| !p.is_empty());
        if password.is_none() {
            missing.push("service.password".to_string());
        }

        match (prefix, username, password) {
            (Some(prefix), Some(username), Some(password)) if missing.is_empty() => {
                Ok(ServiceSettings {
                    prefix: prefix.trim_end_matches('/').to_string(),
                    username: username.to_string(),
                    password,
                })
            }
            _ => Err(ReviewError::Configuration { missing }),
        }
    }

    pub fn vcs_command(&self) -> String {
        self.vcs
            .command
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_VCS_COMMAND)
            .to_string()
    }

    pub fn path_aliases(&self) -> Vec<(String, String)> {
        self.paths
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl ServiceConfig {
    pub fn merge_from(&mut self, other: ServiceConfig) {
        if other.prefix.is_some() {
            self.prefix = other.prefix;
        }
        if other.username.is_some() {
            self.username = other.username;
        }
        if other.password.is_some() {
            self.password = other.password;
        }
        if other.password_env.is_some() {
            self.password_env = other.password_env;
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn is_http_url(raw: &str) -> bool {
    Url::parse(raw)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.host_str().is_some())
        .unwrap_or(false)
}
