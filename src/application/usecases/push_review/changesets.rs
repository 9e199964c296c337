//! 리뷰 대상 체인지셋 선택 단계.

use tracing::debug;

use crate::application::ports::VersionControl;
use crate::domain::error::ReviewError;
use crate::domain::review::Changeset;

pub struct ChangesetSelector<'a> {
    pub vcs: &'a dyn VersionControl,
}

impl ChangesetSelector<'_> {
    /// `--rrev`가 있으면 리비전 범위를 펼치고, 없으면 outgoing 체인지셋을 사용한다.
    /// 어느 쪽이든 비어 있으면 리뷰할 대상이 없는 것으로 본다. 순서는 보존된다.
    pub async fn select(
        &self,
        explicit_revs: &[String],
        dest: Option<&str>,
    ) -> Result<Vec<Changeset>, ReviewError> {
        let changesets = if explicit_revs.is_empty() {
            self.vcs.outgoing(dest).await
        } else {
            self.vcs.expand_revisions(explicit_revs).await
        }
        .map_err(ReviewError::vcs)?;

        if changesets.is_empty() {
            return Err(ReviewError::NothingToReview);
        }
        debug!(count = changesets.len(), explicit = !explicit_revs.is_empty(), "changesets selected");
        Ok(changesets)
    }
}
