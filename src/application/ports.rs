//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::{Config, ServiceConfig, ServiceSettings};
use crate::domain::error::ReviewError;
use crate::domain::repository::Project;
use crate::domain::review::{Changeset, Person, ReviewRequest, ReviewResult};

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 서비스 비밀번호(inline/env)를 런타임 값으로 해석하는 포트.
pub trait CredentialResolver: Send + Sync {
    fn resolve_password(&self, service: &ServiceConfig) -> Result<Option<String>>;
}

/// 원격 리뷰 디렉터리(사람/저장소 계층/리뷰 생성) 포트.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> Result<String, ReviewError>;
    async fn list_persons(&self, auth_token: &str) -> Result<Vec<Person>, ReviewError>;
    async fn list_projects(&self, auth_token: &str) -> Result<Vec<Project>, ReviewError>;
    async fn create_review(&self, request: &ReviewRequest) -> Result<ReviewResult, ReviewError>;
}

/// 서비스 설정에 맞는 디렉터리 클라이언트를 생성하는 팩토리 포트.
pub trait DirectoryFactory: Send + Sync {
    fn build(&self, settings: &ServiceSettings) -> Box<dyn DirectoryService>;
}

/// 로컬 버전 관리 시스템 연동 포트.
#[async_trait]
pub trait VersionControl: Send + Sync {
    /// 저장소에 설정된 push 경로 별칭
    async fn path_aliases(&self) -> Result<Vec<(String, String)>>;
    /// 리비전 지정자를 순서가 보존된 체인지셋 목록(설명 포함)으로 펼친다
    async fn expand_revisions(&self, specs: &[String]) -> Result<Vec<Changeset>>;
    /// 대상에 아직 없는 체인지셋
    async fn outgoing(&self, dest: Option<&str>) -> Result<Vec<Changeset>>;
    /// 원래 인자를 그대로 사용해 push한다
    async fn push(&self, dest: Option<&str>, args: &[String]) -> Result<()>;
}

/// 설정에 맞는 VCS 구현을 생성하는 팩토리 포트.
pub trait VcsFactory: Send + Sync {
    fn build(&self, config: &Config) -> Box<dyn VersionControl>;
}

/// 여러 후보에 매칭된 리뷰어 토큰을 사용자가 고르게 하는 포트.
/// 응답이 올 때까지 블로킹한다.
pub trait ReviewerChooser: Send + Sync {
    fn choose(&self, token: &str, candidates: &[Person]) -> Result<usize>;
}

/// 리뷰 설명을 에디터로 편집하는 포트. 편집된 원문을 그대로 돌려준다.
pub trait DescriptionEditor: Send + Sync {
    fn edit(&self, buffer: &str) -> Result<String>;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn section(&self, name: &str);
    fn kv(&self, key: &str, value: &str);
    fn status(&self, scope: &str, message: &str);
    fn warn(&self, message: &str);
    fn raw(&self, line: &str);
}
