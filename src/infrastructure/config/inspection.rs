//! 적용 설정 진단(inspection) 뷰 모델. 비밀번호 값은 절대 출력하지 않는다.

use std::collections::BTreeMap;

use serde::Serialize;

use super::loader::LoadedConfig;
use super::resolve::resolve_password;
use super::utils::command_exists;
use crate::application::config::Config;
use crate::domain::error::ReviewError;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub service: ServiceInspection,
    pub paths: BTreeMap<String, String>,
    pub vcs: VcsInspection,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceInspection {
    pub prefix: Option<String>,
    pub username: Option<String>,
    pub password_source: Option<String>,
    pub password_resolved: bool,
    /// 누락된 필수 설정(없으면 빈 목록)
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VcsInspection {
    pub command: String,
    pub command_available: bool,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            service: ServiceInspection::from_config(&loaded.config),
            paths: loaded.config.paths.clone(),
            vcs: VcsInspection {
                command: loaded.config.vcs_command(),
                command_available: command_exists(&loaded.config.vcs_command()),
            },
        }
    }
}

impl ServiceInspection {
    fn from_config(config: &Config) -> Self {
        let password = resolve_password(&config.service);
        let password_resolved = password.password.is_some();
        let missing = match config.service_settings(password.password) {
            Ok(_) => Vec::new(),
            Err(ReviewError::Configuration { missing }) => missing,
            Err(other) => vec![other.to_string()],
        };

        Self {
            prefix: config.service.prefix.clone(),
            username: config.service.username.clone(),
            password_source: password.source,
            password_resolved,
            missing,
        }
    }
}
