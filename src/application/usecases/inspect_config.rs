//! 설정 파일 탐색/병합 결과를 확인하는 유스케이스.

use anyhow::Result;

use crate::application::ports::ConfigRepository;

/// 병합된 설정을 비밀번호를 가린 JSON으로 반환한다.
pub struct InspectConfigUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
}

impl InspectConfigUseCase<'_> {
    pub fn execute(&self) -> Result<String> {
        self.config_repo.inspect_pretty_json()
    }
}
