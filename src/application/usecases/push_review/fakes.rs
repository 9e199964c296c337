//! 유스케이스 테스트용 인메모리 포트 구현.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use anyhow::{Result, bail};
use async_trait::async_trait;

use crate::application::config::{Config, ServiceConfig, ServiceSettings};
use crate::application::ports::{
    ConfigRepository, CredentialResolver, DescriptionEditor, DirectoryFactory, DirectoryService,
    Reporter, ReviewerChooser, VcsFactory, VersionControl,
};
use crate::domain::error::ReviewError;
use crate::domain::repository::{Project, Repo, RepoGroup};
use crate::domain::review::{Changeset, Person, ReviewRequest, ReviewResult};

pub const PREFIX: &str = "https://ka.kilnhg.com";

/// 여러 fake가 공유하는 호출 순서 기록.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, entry: &str) -> usize {
        self.entries().iter().filter(|e| e.as_str() == entry).count()
    }

    pub fn position(&self, entry: &str) -> Option<usize> {
        self.entries().iter().position(|e| e == entry)
    }
}

pub fn person(name: &str, email: &str, id: u64) -> Person {
    Person {
        name: name.to_string(),
        email: email.to_string(),
        id,
    }
}

pub fn changeset(hash: &str, description: &str) -> Changeset {
    Changeset {
        hash: hash.to_string(),
        description: description.to_string(),
    }
}

pub fn people() -> Vec<Person> {
    vec![
        person("Tom A", "tom@x.com", 1),
        person("Dick B", "dick@x.com", 2),
        person("Harry C", "harry@x.com", 3),
    ]
}

pub fn projects() -> Vec<Project> {
    vec![Project {
        name: "Website".to_string(),
        groups: vec![RepoGroup {
            name: "Group".to_string(),
            repos: vec![
                Repo {
                    id: 7,
                    project_slug: "Website".to_string(),
                    group_slug: "Group".to_string(),
                    slug: "stable".to_string(),
                },
                Repo {
                    id: 8,
                    project_slug: "Website".to_string(),
                    group_slug: "Group".to_string(),
                    slug: "webapp".to_string(),
                },
            ],
        }],
    }]
}

#[derive(Clone)]
pub struct FakeDirectory {
    pub persons: Vec<Person>,
    pub projects: Vec<Project>,
    pub review: ReviewResult,
    pub fail_login: bool,
    pub fail_review_transport: bool,
    pub log: CallLog,
    pub requests: Arc<Mutex<Vec<ReviewRequest>>>,
}

impl FakeDirectory {
    pub fn new(log: CallLog) -> Self {
        Self {
            persons: people(),
            projects: projects(),
            review: ReviewResult::Created { review_id: 42 },
            fail_login: false,
            fail_review_transport: false,
            log,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn last_request(&self) -> Option<ReviewRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl DirectoryService for FakeDirectory {
    async fn login(&self, username: &str, _password: &str) -> Result<String, ReviewError> {
        self.log.push("login");
        if self.fail_login {
            return Err(ReviewError::BusinessFailure {
                operation: "login",
                raw: r#"{"errors":[{"sError":"bad password"}]}"#.to_string(),
            });
        }
        Ok(format!("token-for-{username}"))
    }

    async fn list_persons(&self, _auth_token: &str) -> Result<Vec<Person>, ReviewError> {
        self.log.push("list_persons");
        Ok(self.persons.clone())
    }

    async fn list_projects(&self, _auth_token: &str) -> Result<Vec<Project>, ReviewError> {
        self.log.push("list_projects");
        Ok(self.projects.clone())
    }

    async fn create_review(&self, request: &ReviewRequest) -> Result<ReviewResult, ReviewError> {
        self.log.push("create_review");
        self.requests.lock().unwrap().push(request.clone());
        if self.fail_review_transport {
            return Err(ReviewError::RemoteCall {
                url: format!("{PREFIX}/Api/1.0/Review/Create"),
                message: "connection reset".to_string(),
            });
        }
        Ok(self.review.clone())
    }
}

pub struct FakeDirectoryFactory {
    pub directory: FakeDirectory,
}

impl DirectoryFactory for FakeDirectoryFactory {
    fn build(&self, _settings: &ServiceSettings) -> Box<dyn DirectoryService> {
        self.directory.log.push("directory_build");
        Box::new(self.directory.clone())
    }
}

#[derive(Clone)]
pub struct FakeVcs {
    pub aliases: Vec<(String, String)>,
    pub revisions: Vec<Changeset>,
    pub outgoing: Vec<Changeset>,
    pub fail_push: bool,
    pub log: CallLog,
    pub outgoing_dests: Arc<Mutex<Vec<Option<String>>>>,
    pub pushes: Arc<Mutex<Vec<(Option<String>, Vec<String>)>>>,
}

impl FakeVcs {
    pub fn new(log: CallLog) -> Self {
        Self {
            aliases: vec![(
                "default".to_string(),
                format!("{PREFIX}/code/Website/Group/stable"),
            )],
            revisions: Vec::new(),
            outgoing: vec![
                changeset("0123456789abcdef0123456789abcdef01234567", "fix login"),
                changeset("89abcdef0123456789abcdef0123456789abcdef", "add tests"),
            ],
            fail_push: false,
            log,
            outgoing_dests: Arc::new(Mutex::new(Vec::new())),
            pushes: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl VersionControl for FakeVcs {
    async fn path_aliases(&self) -> Result<Vec<(String, String)>> {
        self.log.push("path_aliases");
        Ok(self.aliases.clone())
    }

    async fn expand_revisions(&self, _specs: &[String]) -> Result<Vec<Changeset>> {
        self.log.push("expand_revisions");
        Ok(self.revisions.clone())
    }

    async fn outgoing(&self, dest: Option<&str>) -> Result<Vec<Changeset>> {
        self.log.push("outgoing");
        self.outgoing_dests.lock().unwrap().push(dest.map(String::from));
        Ok(self.outgoing.clone())
    }

    async fn push(&self, dest: Option<&str>, args: &[String]) -> Result<()> {
        self.log.push("push");
        self.pushes
            .lock()
            .unwrap()
            .push((dest.map(String::from), args.to_vec()));
        if self.fail_push {
            bail!("abort: push creates new remote head");
        }
        Ok(())
    }
}

pub struct FakeVcsFactory {
    pub vcs: FakeVcs,
}

impl VcsFactory for FakeVcsFactory {
    fn build(&self, _config: &Config) -> Box<dyn VersionControl> {
        Box::new(self.vcs.clone())
    }
}

/// 미리 정한 순서대로 후보 번호를 돌려주는 chooser.
#[derive(Default)]
pub struct ScriptedChooser {
    picks: Mutex<VecDeque<usize>>,
    pub prompts: Mutex<Vec<(String, Vec<String>)>>,
}

impl ScriptedChooser {
    pub fn with_picks(picks: &[usize]) -> Self {
        Self {
            picks: Mutex::new(picks.iter().copied().collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl ReviewerChooser for ScriptedChooser {
    fn choose(&self, token: &str, candidates: &[Person]) -> Result<usize> {
        self.prompts.lock().unwrap().push((
            token.to_string(),
            candidates.iter().map(Person::label).collect(),
        ));
        self.picks
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("no scripted answer for \"{token}\""))
    }
}

pub struct FakeEditor {
    pub reply: String,
    pub seen: Mutex<Option<String>>,
}

impl FakeEditor {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            seen: Mutex::new(None),
        }
    }
}

impl DescriptionEditor for FakeEditor {
    fn edit(&self, buffer: &str) -> Result<String> {
        *self.seen.lock().unwrap() = Some(buffer.to_string());
        Ok(self.reply.clone())
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    pub lines: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().unwrap().iter().any(|l| l.contains(needle))
    }
}

impl Reporter for RecordingReporter {
    fn section(&self, name: &str) {
        self.lines.lock().unwrap().push(format!("== {name}"));
    }

    fn kv(&self, key: &str, value: &str) {
        self.lines.lock().unwrap().push(format!("{key}: {value}"));
    }

    fn status(&self, scope: &str, message: &str) {
        self.lines.lock().unwrap().push(format!("[{scope}] {message}"));
    }

    fn warn(&self, message: &str) {
        self.lines.lock().unwrap().push(format!("warn: {message}"));
    }

    fn raw(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

pub struct StaticConfigRepository {
    pub config: Config,
    /// 설정되면 `load`가 이 메시지로 실패한다(깨진 설정 파일 흉내)
    pub load_error: Option<String>,
}

impl StaticConfigRepository {
    pub fn complete() -> Self {
        Self {
            config: Config {
                service: ServiceConfig {
                    prefix: Some(PREFIX.to_string()),
                    username: Some("me@ka.org".to_string()),
                    password: Some("hunter2".to_string()),
                    password_env: None,
                },
                ..Default::default()
            },
            load_error: None,
        }
    }
}

impl ConfigRepository for StaticConfigRepository {
    fn load(&self) -> Result<Config> {
        if let Some(message) = &self.load_error {
            bail!("{message}");
        }
        Ok(self.config.clone())
    }

    fn inspect_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.config)?)
    }
}

/// inline 비밀번호만 사용하는 resolver.
pub struct InlineCredentials;

impl CredentialResolver for InlineCredentials {
    fn resolve_password(&self, service: &ServiceConfig) -> Result<Option<String>> {
        Ok(service.password.clone())
    }
}
