//! 서비스 비밀번호 해석 포트 구현.

use anyhow::Result;

use crate::application::config::ServiceConfig;
use crate::application::ports::CredentialResolver;
use crate::infrastructure::config::resolve_password;

/// 설정(password/password_env)에 기반해 런타임 비밀번호를 해석한다.
pub struct ConfigCredentialResolver;

impl CredentialResolver for ConfigCredentialResolver {
    fn resolve_password(&self, service: &ServiceConfig) -> Result<Option<String>> {
        Ok(resolve_password(service).password)
    }
}
