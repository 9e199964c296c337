//! 디렉터리 서비스 포트 구현 어댑터.

use crate::application::config::ServiceSettings;
use crate::application::ports::{DirectoryFactory, DirectoryService};
use crate::infrastructure::kiln::KilnClient;

/// 설정된 prefix로 Kiln 클라이언트를 만든다.
pub struct KilnDirectoryFactory;

impl DirectoryFactory for KilnDirectoryFactory {
    fn build(&self, settings: &ServiceSettings) -> Box<dyn DirectoryService> {
        Box::new(KilnClient::new(settings.prefix.clone()))
    }
}
