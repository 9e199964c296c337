//! VCS 포트 구현 어댑터.

use crate::application::config::Config;
use crate::application::ports::{VcsFactory, VersionControl};
use crate::infrastructure::vcs;

/// 설정의 `vcs.command`로 hg 실행기를 만든다.
pub struct HgVcsFactory;

impl VcsFactory for HgVcsFactory {
    fn build(&self, config: &Config) -> Box<dyn VersionControl> {
        vcs::build_vcs_client(config)
    }
}
