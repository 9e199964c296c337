//! Kiln API 1.0 응답 레코드.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::repository::{Project, Repo, RepoGroup};
use crate::domain::review::Person;

#[derive(Debug, Deserialize)]
pub(super) struct PersonRecord {
    #[serde(rename = "sName")]
    name: String,
    #[serde(rename = "sEmail")]
    email: String,
    #[serde(rename = "ixPerson")]
    id: u64,
}

#[derive(Debug, Deserialize)]
pub(super) struct ProjectRecord {
    #[serde(rename = "sName", default)]
    name: String,
    #[serde(rename = "repoGroups", default)]
    repo_groups: Vec<RepoGroupRecord>,
}

#[derive(Debug, Deserialize)]
struct RepoGroupRecord {
    #[serde(rename = "sName", default)]
    name: String,
    #[serde(default)]
    repos: Vec<RepoRecord>,
}

#[derive(Debug, Deserialize)]
struct RepoRecord {
    #[serde(rename = "ixRepo")]
    id: u64,
    #[serde(rename = "sProjectSlug")]
    project_slug: String,
    #[serde(rename = "sGroupSlug")]
    group_slug: String,
    #[serde(rename = "sSlug")]
    slug: String,
}

impl From<PersonRecord> for Person {
    fn from(record: PersonRecord) -> Self {
        Person {
            name: record.name,
            email: record.email,
            id: record.id,
        }
    }
}

impl From<ProjectRecord> for Project {
    fn from(record: ProjectRecord) -> Self {
        Project {
            name: record.name,
            groups: record
                .repo_groups
                .into_iter()
                .map(|g| RepoGroup {
                    name: g.name,
                    repos: g
                        .repos
                        .into_iter()
                        .map(|r| Repo {
                            id: r.id,
                            project_slug: r.project_slug,
                            group_slug: r.group_slug,
                            slug: r.slug,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// `{"errors":[...]}` 형태의 in-band 오류 응답인지 확인한다.
pub(super) fn has_api_errors(body: &str) -> bool {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("errors").map(|e| e.is_array()))
        .unwrap_or(false)
}

/// 리뷰 생성 응답에서 `ixReview`를 꺼낸다. 숫자 문자열도 허용한다.
pub(super) fn review_id(body: &str) -> Option<u64> {
    let json: Value = serde_json::from_str(body).ok()?;
    match json.get("ixReview")? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
