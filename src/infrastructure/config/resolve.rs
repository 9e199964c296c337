//! 설정 값(password/env)을 실제 런타임 값으로 해석하는 유틸리티.
//!
//! - 환경변수 접근은 인프라 계층에서만 수행한다.

use std::env;

use crate::application::config::ServiceConfig;

/// 비밀번호 해석 결과. `source`는 진단 출력용 라벨이다.
#[derive(Debug, Clone, Default)]
pub struct PasswordResolution {
    pub password: Option<String>,
    pub source: Option<String>,
}

/// inline `password` 우선, 없으면 `password_env` 환경변수를 조회한다.
pub fn resolve_password(service: &ServiceConfig) -> PasswordResolution {
    if let Some(password) = service.password.as_deref().filter(|v| !v.is_empty()) {
        return PasswordResolution {
            password: Some(password.to_string()),
            source: Some("inline".to_string()),
        };
    }

    let Some(env_name) = service
        .password_env
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
    else {
        return PasswordResolution::default();
    };

    match env::var(env_name).ok().filter(|v| !v.is_empty()) {
        Some(v) => PasswordResolution {
            password: Some(v),
            source: Some(format!("env:{env_name}")),
        },
        None => PasswordResolution {
            password: None,
            source: Some(format!("env:{env_name} (missing)")),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_password_wins() {
        let service = ServiceConfig {
            password: Some("pw".into()),
            password_env: Some("PUSHREVIEW_TEST_UNUSED".into()),
            ..Default::default()
        };
        let resolved = resolve_password(&service);
        assert_eq!(resolved.password.as_deref(), Some("pw"));
        assert_eq!(resolved.source.as_deref(), Some("inline"));
    }

    #[test]
    fn missing_env_is_labelled() {
        let service = ServiceConfig {
            password_env: Some("PUSHREVIEW_TEST_SURELY_UNSET_VAR".into()),
            ..Default::default()
        };
        let resolved = resolve_password(&service);
        assert!(resolved.password.is_none());
        assert_eq!(
            resolved.source.as_deref(),
            Some("env:PUSHREVIEW_TEST_SURELY_UNSET_VAR (missing)")
        );
    }

    #[test]
    fn nothing_configured() {
        let resolved = resolve_password(&ServiceConfig::default());
        assert!(resolved.password.is_none());
        assert!(resolved.source.is_none());
    }
}
