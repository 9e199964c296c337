//! push 대상 별칭 → 정규 URL → 원격 저장소 id 해석 단계.

use tracing::debug;

use crate::application::ports::DirectoryService;
use crate::domain::error::ReviewError;
use crate::domain::policy::{find_repo_id, resolve_destination};

/// 해석된 push 대상.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedRepo {
    pub url: String,
    pub repo_id: u64,
}

pub struct RepoLocator<'a> {
    pub directory: &'a dyn DirectoryService,
    pub prefix: &'a str,
}

impl RepoLocator<'_> {
    /// 별칭 표에서 push 대상 URL을 고른다. outgoing/push/리뷰 저장소가 모두 이 URL을 쓴다.
    pub fn destination(
        &self,
        aliases: &[(String, String)],
        explicit_dest: Option<&str>,
    ) -> Result<String, ReviewError> {
        let url = resolve_destination(aliases, explicit_dest).ok_or(ReviewError::NoDestination)?;
        debug!(%url, "push destination resolved");
        Ok(url)
    }

    /// 프로젝트 계층에서 같은 URL의 저장소를 찾는다.
    pub async fn locate(&self, auth_token: &str, url: &str) -> Result<LocatedRepo, ReviewError> {
        let projects = self.directory.list_projects(auth_token).await?;
        let repo_id = find_repo_id(&projects, self.prefix, url).ok_or_else(|| {
            ReviewError::RepositoryNotFound {
                url: url.to_string(),
            }
        })?;

        Ok(LocatedRepo {
            url: url.to_string(),
            repo_id,
        })
    }
}
