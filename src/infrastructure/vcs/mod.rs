//! 로컬 VCS 연동 계층.
//! 현재는 Mercurial 명령행 구현만 제공한다.

pub mod mercurial;

use crate::application::config::Config;
use crate::application::ports::VersionControl;

pub fn build_vcs_client(config: &Config) -> Box<dyn VersionControl> {
    Box::new(mercurial::HgCli::new(config.vcs_command()))
}
