//! Kiln API 1.0 연동 구현.
//! 모든 호출은 form 인코딩 파라미터 + JSON 응답이며, 재시도나 타임아웃은 두지 않는다.

mod wire;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::debug;

use crate::application::ports::DirectoryService;
use crate::domain::error::ReviewError;
use crate::domain::repository::Project;
use crate::domain::review::{Person, ReviewRequest, ReviewResult};

use wire::{PersonRecord, ProjectRecord, has_api_errors, review_id};

pub struct KilnClient {
    client: Client,
    prefix: String,
}

impl KilnClient {
    /// `prefix`는 서비스 루트 URL(예: https://team.kilnhg.com).
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            prefix: prefix.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, command: &str) -> String {
        format!("{}/Api/1.0/{}", self.prefix, command)
    }

    /// 요청을 보내고 (HTTP 상태 성공 여부, 본문)을 돌려준다.
    /// 오류 메시지에는 쿼리 문자열 없는 endpoint만 남긴다(토큰/비밀번호 노출 방지).
    async fn send(&self, req: RequestBuilder, url: &str) -> Result<(bool, String), ReviewError> {
        let resp = req.send().await.map_err(|err| remote_error(url, err))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|err| remote_error(url, err))?;
        debug!(%url, %status, bytes = body.len(), "kiln response");
        Ok((status.is_success(), body))
    }

    /// 조회형 호출 공통 처리: in-band 오류는 BusinessFailure, 그 밖의 HTTP 오류는 RemoteCall.
    async fn fetch(
        &self,
        operation: &'static str,
        req: RequestBuilder,
        url: &str,
    ) -> Result<String, ReviewError> {
        let (ok, body) = self.send(req, url).await?;
        if has_api_errors(&body) {
            return Err(ReviewError::BusinessFailure {
                operation,
                raw: body,
            });
        }
        if !ok {
            return Err(ReviewError::RemoteCall {
                url: url.to_string(),
                message: format!("{operation}: unexpected response: {body}"),
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl DirectoryService for KilnClient {
    async fn login(&self, username: &str, password: &str) -> Result<String, ReviewError> {
        let url = self.endpoint("Auth/Login");
        debug!(%url, %username, "kiln login");
        let req = self
            .client
            .post(&url)
            .form(&[("sUser", username), ("sPassword", password)]);
        let body = self.fetch("login", req, &url).await?;

        match serde_json::from_str::<Value>(&body) {
            Ok(Value::String(token)) if !token.is_empty() => Ok(token),
            _ => Err(ReviewError::BusinessFailure {
                operation: "login",
                raw: body,
            }),
        }
    }

    async fn list_persons(&self, auth_token: &str) -> Result<Vec<Person>, ReviewError> {
        let url = self.endpoint("Person");
        let req = self.client.get(&url).query(&[("token", auth_token)]);
        let body = self.fetch("person list", req, &url).await?;

        let records: Vec<PersonRecord> =
            serde_json::from_str(&body).map_err(|err| invalid_json(&url, err))?;
        debug!(count = records.len(), "kiln persons");
        Ok(records.into_iter().map(Person::from).collect())
    }

    async fn list_projects(&self, auth_token: &str) -> Result<Vec<Project>, ReviewError> {
        let url = self.endpoint("Project");
        let req = self.client.get(&url).query(&[("token", auth_token)]);
        let body = self.fetch("project list", req, &url).await?;

        let records: Vec<ProjectRecord> =
            serde_json::from_str(&body).map_err(|err| invalid_json(&url, err))?;
        debug!(count = records.len(), "kiln projects");
        Ok(records.into_iter().map(Project::from).collect())
    }

    async fn create_review(&self, request: &ReviewRequest) -> Result<ReviewResult, ReviewError> {
        let url = self.endpoint("Review/Create");
        let req = self.client.post(&url).form(&review_form(request));
        let (_, body) = self.send(req, &url).await?;

        // 식별자가 없는 응답은 HTTP 상태와 무관하게 실패로 본다.
        Ok(match review_id(&body) {
            Some(review_id) => ReviewResult::Created { review_id },
            None => ReviewResult::Rejected { raw: body },
        })
    }
}

/// `Review/Create` 파라미터. 목록 값은 같은 키를 반복한다.
fn review_form(request: &ReviewRequest) -> Vec<(&'static str, String)> {
    let mut form = vec![("token", request.auth_token.clone())];
    if let Some(title) = &request.title {
        form.push(("sTitle", title.clone()));
    }
    if let Some(description) = &request.description {
        form.push(("sDescription", description.clone()));
    }
    form.extend(request.changesets.iter().map(|rev| ("revs", rev.clone())));
    form.extend(
        request
            .reviewer_ids
            .iter()
            .map(|id| ("ixReviewers", id.to_string())),
    );
    form.push(("ixRepo", request.repo_id.to_string()));
    form
}

fn remote_error(url: &str, err: reqwest::Error) -> ReviewError {
    ReviewError::RemoteCall {
        url: url.to_string(),
        message: err.without_url().to_string(),
    }
}

fn invalid_json(url: &str, err: serde_json::Error) -> ReviewError {
    ReviewError::RemoteCall {
        url: url.to_string(),
        message: format!("invalid JSON: {err}"),
    }
}
