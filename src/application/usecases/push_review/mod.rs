//! push 후 코드 리뷰를 생성하는 전체 오케스트레이션 유스케이스.
//!
//! 상태 흐름:
//! `Start → Bypassed` 또는
//! `Start → Authenticating → GatheringParams → Pushing → SubmittingReview → Done`.
//! push 이전 단계의 실패는 부작용 없이 중단하고, push 이후의 리뷰 생성 실패는 경고로 보고한다.

mod changesets;
mod locate;
mod reviewers;
mod submit;

#[cfg(test)]
pub(crate) mod fakes;

use tracing::{info, warn};

use crate::application::config::{Config, ServiceSettings};
use crate::application::ports::{
    ConfigRepository, CredentialResolver, DescriptionEditor, DirectoryFactory, DirectoryService,
    Reporter, ReviewerChooser, VcsFactory, VersionControl,
};
use crate::domain::error::ReviewError;
use crate::domain::policy::{
    default_description, editor_buffer, review_url, strip_editor_comments,
};
use crate::domain::review::{
    Changeset, PushReviewOutcome, ReviewRequest, ReviewResult, RunOptions,
};

pub use changesets::ChangesetSelector;
pub use locate::{LocatedRepo, RepoLocator};
pub use reviewers::ReviewerResolver;
pub use submit::ReviewSubmitter;

/// 오케스트레이터 상태(로그/진행 출력용).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    Bypassed,
    Authenticating,
    GatheringParams,
    Pushing,
    SubmittingReview,
    Done,
}

impl Stage {
    fn title(self) -> &'static str {
        match self {
            Stage::Start => "Start",
            Stage::Bypassed => "Push (review bypassed)",
            Stage::Authenticating => "Authenticate",
            Stage::GatheringParams => "Gather Review",
            Stage::Pushing => "Push",
            Stage::SubmittingReview => "Create Review",
            Stage::Done => "Done",
        }
    }
}

/// push 전에 모아 둔 리뷰 요청과 push 대상 URL.
struct Gathered {
    request: ReviewRequest,
    push_dest: String,
}

/// push 직후 리뷰 생성까지 정해진 순서로 조율한다.
pub struct PushReviewUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub credential_resolver: &'a dyn CredentialResolver,
    pub directory_factory: &'a dyn DirectoryFactory,
    pub vcs_factory: &'a dyn VcsFactory,
    pub chooser: &'a dyn ReviewerChooser,
    pub editor: &'a dyn DescriptionEditor,
    pub reporter: &'a dyn Reporter,
}

impl<'a> PushReviewUseCase<'a> {
    /// push-review 진입점.
    pub async fn execute(&self, options: RunOptions) -> Result<PushReviewOutcome, ReviewError> {
        let result = self.run(&options).await;
        if let Err(err) = &result {
            warn!(kind = ?err.kind(), error = %err, "push-review failed");
        }
        result
    }

    async fn run(&self, options: &RunOptions) -> Result<PushReviewOutcome, ReviewError> {
        self.enter(Stage::Start);
        let loaded = self.config_repo.load();

        if options.is_bypass() {
            // 우회 push에는 vcs.command만 필요하다. 깨진 설정 때문에 push를 막지 않는다.
            let config = loaded.unwrap_or_else(|err| {
                warn!(error = %format!("{err:#}"), "ignoring unreadable config for bypass push");
                self.reporter.warn(&format!("config ignored: {err:#}"));
                Config::default()
            });
            let vcs = self.vcs_factory.build(&config);
            self.enter(Stage::Bypassed);
            self.push(vcs.as_ref(), options.dest.as_deref(), &options.push_args)
                .await?;
            return Ok(PushReviewOutcome::Bypassed);
        }

        let config = loaded.map_err(|err| ReviewError::InvalidConfig(format!("{err:#}")))?;

        if options.reviewers.is_empty() {
            return Err(ReviewError::NoReviewers);
        }

        let settings = self.service_settings(&config)?;
        let vcs = self.vcs_factory.build(&config);

        self.enter(Stage::Authenticating);
        let directory = self.directory_factory.build(&settings);
        let auth_token = directory
            .login(&settings.username, &settings.password)
            .await?;
        self.reporter.status("Auth", "logged in");

        self.enter(Stage::GatheringParams);
        let gathered = self
            .gather(&config, &settings, directory.as_ref(), vcs.as_ref(), options, auth_token)
            .await?;

        self.enter(Stage::Pushing);
        self.push(vcs.as_ref(), Some(&gathered.push_dest), &options.push_args)
            .await?;

        self.enter(Stage::SubmittingReview);
        self.reporter.status("Review", "Creating review...");
        let submitter = ReviewSubmitter {
            directory: directory.as_ref(),
        };
        let outcome = match submitter.submit(&gathered.request).await {
            Ok(ReviewResult::Created { review_id }) => {
                let url = review_url(&settings.prefix, review_id);
                self.reporter.status("Review", "done!");
                PushReviewOutcome::ReviewCreated {
                    review_id,
                    review_url: url,
                }
            }
            Ok(ReviewResult::Rejected { raw }) => self.review_failed(raw),
            // push는 이미 끝났으므로 전송 실패도 경고로만 남긴다.
            Err(err) => self.review_failed(err.to_string()),
        };

        if let PushReviewOutcome::ReviewCreated { review_url, .. } = &outcome {
            self.enter(Stage::Done);
            self.reporter.raw(review_url);
        }
        Ok(outcome)
    }

    fn enter(&self, stage: Stage) {
        info!(stage = ?stage, "push-review stage");
        if stage != Stage::Start {
            self.reporter.section(stage.title());
        }
    }

    fn service_settings(&self, config: &Config) -> Result<ServiceSettings, ReviewError> {
        let password = self
            .credential_resolver
            .resolve_password(&config.service)
            .map_err(|err| ReviewError::Configuration {
                missing: vec![format!("service.password ({err:#})")],
            })?;
        config.service_settings(password)
    }

    async fn gather(
        &self,
        config: &Config,
        settings: &ServiceSettings,
        directory: &dyn DirectoryService,
        vcs: &dyn VersionControl,
        options: &RunOptions,
        auth_token: String,
    ) -> Result<Gathered, ReviewError> {
        let locator = RepoLocator {
            directory,
            prefix: &settings.prefix,
        };
        let mut aliases = vcs.path_aliases().await.map_err(ReviewError::vcs)?;
        aliases.extend(config.path_aliases());
        // outgoing, push, 리뷰 저장소가 모두 같은 URL을 대상으로 한다.
        let dest_url = locator.destination(&aliases, options.dest.as_deref())?;

        let changesets = ChangesetSelector { vcs }
            .select(&options.revs, Some(&dest_url))
            .await?;
        let hashes: Vec<String> = changesets.iter().map(Changeset::short_hash).collect();
        self.reporter.kv("Changesets", &hashes.join(", "));

        let reviewers = ReviewerResolver {
            directory,
            chooser: self.chooser,
        }
        .resolve(&auth_token, &options.reviewers)
        .await?;
        let names: Vec<String> = reviewers.iter().map(|p| p.label()).collect();
        self.reporter.kv("Reviewers", &names.join(", "));

        let description = if options.editor {
            self.edit_description(options, &changesets, &settings.username)?
        } else {
            options.comment().map(str::to_string)
        };

        let located = locator.locate(&auth_token, &dest_url).await?;
        self.reporter.kv("Repository", &located.url);

        Ok(Gathered {
            request: ReviewRequest {
                auth_token,
                title: options.title().map(str::to_string),
                description,
                changesets: hashes,
                reviewer_ids: reviewers.iter().map(|p| p.id).collect(),
                repo_id: located.repo_id,
            },
            push_dest: located.url,
        })
    }

    /// 에디터로 리뷰 설명을 받는다. `--rcomment`가 없으면 체인지셋 설명을 초기값으로 쓴다.
    fn edit_description(
        &self,
        options: &RunOptions,
        changesets: &[Changeset],
        user: &str,
    ) -> Result<Option<String>, ReviewError> {
        let descriptions: Vec<String> = changesets.iter().map(|c| c.description.clone()).collect();
        let initial = default_description(options.comment(), &descriptions);
        let edited = self
            .editor
            .edit(&editor_buffer(&initial, user))
            .map_err(ReviewError::interaction)?;
        let text = strip_editor_comments(&edited);
        Ok((!text.is_empty()).then_some(text))
    }

    async fn push(
        &self,
        vcs: &dyn VersionControl,
        dest: Option<&str>,
        args: &[String],
    ) -> Result<(), ReviewError> {
        vcs.push(dest, args).await.map_err(ReviewError::vcs)?;
        self.reporter.status("Push", "pushed");
        Ok(())
    }

    fn review_failed(&self, detail: String) -> PushReviewOutcome {
        self.reporter.warn(&format!("FAILED: {detail}"));
        self.reporter
            .warn("changesets were pushed; create the review manually or retry with --rrev");
        PushReviewOutcome::ReviewFailed { detail }
    }
}
