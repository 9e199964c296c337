//! 애플리케이션 조립(composition root) 모듈.

use crate::application::ports::{DescriptionEditor, ReviewerChooser};
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::push_review::PushReviewUseCase;
use crate::infrastructure::adapters::{
    ConfigCredentialResolver, ConsoleReporter, ExternalEditor, HgVcsFactory, JsonConfigRepository,
    KilnDirectoryFactory, StdinChooser,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    credential_resolver: ConfigCredentialResolver,
    directory_factory: KilnDirectoryFactory,
    vcs_factory: HgVcsFactory,
    reporter: ConsoleReporter,
    chooser: Box<dyn ReviewerChooser>,
    editor: Box<dyn DescriptionEditor>,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self::with_interaction(Box::new(StdinChooser), Box::new(ExternalEditor))
    }
}

impl AppComposition {
    /// 대화형 입력(리뷰어 선택/설명 편집) 어댑터를 외부에서 주입한다.
    pub fn with_interaction(
        chooser: Box<dyn ReviewerChooser>,
        editor: Box<dyn DescriptionEditor>,
    ) -> Self {
        Self {
            config_repo: JsonConfigRepository,
            credential_resolver: ConfigCredentialResolver,
            directory_factory: KilnDirectoryFactory,
            vcs_factory: HgVcsFactory,
            reporter: ConsoleReporter::new(),
            chooser,
            editor,
        }
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// push + 리뷰 생성 유스케이스를 생성한다.
    pub fn push_review_usecase(&self) -> PushReviewUseCase<'_> {
        PushReviewUseCase {
            config_repo: &self.config_repo,
            credential_resolver: &self.credential_resolver,
            directory_factory: &self.directory_factory,
            vcs_factory: &self.vcs_factory,
            chooser: self.chooser.as_ref(),
            editor: self.editor.as_ref(),
            reporter: &self.reporter,
        }
    }
}
