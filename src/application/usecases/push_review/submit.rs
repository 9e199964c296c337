//! 리뷰 생성 요청 전송 단계.

use tracing::{info, warn};

use crate::application::ports::DirectoryService;
use crate::domain::error::ReviewError;
use crate::domain::review::{ReviewRequest, ReviewResult};

pub struct ReviewSubmitter<'a> {
    pub directory: &'a dyn DirectoryService,
}

impl ReviewSubmitter<'_> {
    /// 재시도 없이 한 번만 호출한다. 응답 원문은 실패 시 그대로 보존된다.
    pub async fn submit(&self, request: &ReviewRequest) -> Result<ReviewResult, ReviewError> {
        let result = self.directory.create_review(request).await?;
        match &result {
            ReviewResult::Created { review_id } => info!(review_id, "review created"),
            ReviewResult::Rejected { raw } => warn!(%raw, "review creation rejected"),
        }
        Ok(result)
    }
}
