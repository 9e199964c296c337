//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod config_repository;
mod credential_resolver;
mod description_editor;
mod directory_factory;
mod reporter;
mod reviewer_chooser;
mod vcs_factory;

pub use config_repository::JsonConfigRepository;
pub use credential_resolver::ConfigCredentialResolver;
pub use description_editor::ExternalEditor;
pub use directory_factory::KilnDirectoryFactory;
pub use reporter::ConsoleReporter;
pub use reviewer_chooser::StdinChooser;
pub use vcs_factory::HgVcsFactory;
