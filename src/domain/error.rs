//! push-review 흐름의 오류 분류.

use thiserror::Error;

/// 오류가 속한 분류. 오케스트레이터와 CLI가 종료 코드/출력을 결정할 때 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Resolution,
    Lookup,
    RemoteCall,
    BusinessFailure,
    VersionControl,
    Interaction,
}

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("missing or invalid settings: {}", .missing.join(", "))]
    Configuration { missing: Vec<String> },

    #[error("config could not be loaded: {0}")]
    InvalidConfig(String),

    #[error("must specify at least one reviewer via --rr. Pass \"--rr none\" to bypass review")]
    NoReviewers,

    #[error("no reviewer found matching \"{token}\"")]
    ReviewerNotFound { token: String },

    #[error("choice {index} is out of range for \"{token}\" ({count} candidates)")]
    InvalidChoice {
        token: String,
        index: usize,
        count: usize,
    },

    #[error("no push destination configured (set paths.default or pass DEST)")]
    NoDestination,

    #[error("no repository found matching {url}")]
    RepositoryNotFound { url: String },

    #[error("no changesets found to push/review. Use --rrev to specify changesets manually")]
    NothingToReview,

    #[error("error communicating with review service: url \"{url}\", error \"{message}\"")]
    RemoteCall { url: String, message: String },

    #[error("{operation} failed: {raw}")]
    BusinessFailure {
        operation: &'static str,
        raw: String,
    },

    #[error("version control: {0}")]
    VersionControl(String),

    #[error("interaction: {0}")]
    Interaction(String),
}

impl ReviewError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration { .. } | Self::InvalidConfig(_) => ErrorKind::Configuration,
            Self::NoReviewers | Self::ReviewerNotFound { .. } | Self::InvalidChoice { .. } => {
                ErrorKind::Resolution
            }
            Self::NoDestination | Self::RepositoryNotFound { .. } | Self::NothingToReview => {
                ErrorKind::Lookup
            }
            Self::RemoteCall { .. } => ErrorKind::RemoteCall,
            Self::BusinessFailure { .. } => ErrorKind::BusinessFailure,
            Self::VersionControl(_) => ErrorKind::VersionControl,
            Self::Interaction(_) => ErrorKind::Interaction,
        }
    }

    /// anyhow 체인을 한 줄 메시지로 접어 VCS 오류로 만든다.
    pub fn vcs(err: anyhow::Error) -> Self {
        Self::VersionControl(format!("{err:#}"))
    }

    pub fn interaction(err: anyhow::Error) -> Self {
        Self::Interaction(format!("{err:#}"))
    }

    /// 설정 누락 시 사용자에게 보여줄 보완 안내문.
    pub fn remediation(&self) -> Option<String> {
        let Self::Configuration { missing } = self else {
            return None;
        };

        let mut out = String::from("In order to work, please set in your pushreview config:\n\n");
        out.push_str("{\n");
        out.push_str("  \"service\": {\n");
        out.push_str("    \"prefix\": \"https://<yourteam>.kilnhg.com\",\n");
        out.push_str("    \"username\": \"<username>@<domain>.com\",\n");
        out.push_str("    \"password_env\": \"KILN_PASSWORD\"\n");
        out.push_str("  }\n");
        out.push_str("}\n\n");
        out.push_str(&format!("missing: {}\n", missing.join(", ")));
        Some(out)
    }
}
