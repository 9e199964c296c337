//! 리뷰어 토큰을 디렉터리의 사람 레코드로 해석하는 단계.

use std::collections::BTreeMap;

use tracing::debug;

use crate::application::ports::{DirectoryService, ReviewerChooser};
use crate::domain::error::ReviewError;
use crate::domain::policy::{match_candidates, normalize_reviewer_tokens};
use crate::domain::review::Person;

pub struct ReviewerResolver<'a> {
    pub directory: &'a dyn DirectoryService,
    pub chooser: &'a dyn ReviewerChooser,
}

impl ReviewerResolver<'_> {
    /// 각 토큰을 정확히 한 사람으로 해석한다.
    /// 디렉터리는 호출당 한 번만 조회하고, 같은 사람(이메일 기준)은 하나로 합친다.
    /// 결과는 정규화된 이메일 순으로 정렬된다.
    pub async fn resolve(
        &self,
        auth_token: &str,
        raw_reviewers: &[String],
    ) -> Result<Vec<Person>, ReviewError> {
        let tokens = normalize_reviewer_tokens(raw_reviewers);
        if tokens.is_empty() {
            return Err(ReviewError::NoReviewers);
        }

        let people = self.directory.list_persons(auth_token).await?;
        debug!(tokens = tokens.len(), people = people.len(), "resolving reviewers");

        let mut accepted: BTreeMap<String, Person> = BTreeMap::new();
        for token in &tokens {
            let picked = self.pick(token, match_candidates(token, &people))?;
            debug!(%token, email = %picked.email, "reviewer resolved");
            accepted.insert(picked.key(), picked);
        }

        Ok(accepted.into_values().collect())
    }

    fn pick(&self, token: &str, candidates: Vec<&Person>) -> Result<Person, ReviewError> {
        match candidates.as_slice() {
            [] => Err(ReviewError::ReviewerNotFound {
                token: token.to_string(),
            }),
            [only] => Ok((*only).clone()),
            many => {
                let owned: Vec<Person> = many.iter().map(|p| (*p).clone()).collect();
                let index = self
                    .chooser
                    .choose(token, &owned)
                    .map_err(ReviewError::interaction)?;
                let count = owned.len();
                owned
                    .into_iter()
                    .nth(index)
                    .ok_or_else(|| ReviewError::InvalidChoice {
                        token: token.to_string(),
                        index,
                        count,
                    })
            }
        }
    }
}
