//! 리뷰 도메인 엔티티/값 객체.

/// 리뷰를 건너뛰고 순수 push만 수행하게 하는 예약 리뷰어 값.
pub const BYPASS_SENTINEL: &str = "none";

/// 리뷰 서비스가 사용하는 짧은 체인지셋 해시 길이.
pub const SHORT_HASH_LEN: usize = 12;

/// CLI에서 넘어온 push-review 실행 옵션.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// push 대상(별칭 또는 URL). 최대 하나.
    pub dest: Option<String>,
    /// `--rr` 값 목록. 각 항목은 쉼표로 묶인 여러 이름일 수 있다.
    pub reviewers: Vec<String>,
    /// `--rrev` 리비전 지정자 목록
    pub revs: Vec<String>,
    pub title: Option<String>,
    pub comment: Option<String>,
    /// 에디터로 리뷰 설명을 작성할지 여부
    pub editor: bool,
    /// `hg push`에 그대로 전달할 추가 인자
    pub push_args: Vec<String>,
}

impl RunOptions {
    /// 리뷰어 인자가 정확히 우회 값 하나인지 확인한다.
    pub fn is_bypass(&self) -> bool {
        self.reviewers.len() == 1 && self.reviewers[0] == BYPASS_SENTINEL
    }

    pub fn title(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }

    pub fn comment(&self) -> Option<&str> {
        non_empty(self.comment.as_deref())
    }
}

/// 디렉터리 서비스의 사람 레코드.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub email: String,
    pub id: u64,
}

impl Person {
    /// 후보 목록 표시용 `"<name> (<email>)"` 라벨.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.email)
    }

    /// 세션 내 식별 키(대소문자 무시 이메일).
    pub fn key(&self) -> String {
        self.email.to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Changeset {
    pub hash: String,
    pub description: String,
}

impl Changeset {
    pub fn short_hash(&self) -> String {
        short_hash(&self.hash)
    }
}

pub fn short_hash(hash: &str) -> String {
    hash.chars().take(SHORT_HASH_LEN).collect()
}

/// 리뷰 생성 API 요청 본문.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRequest {
    pub auth_token: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub changesets: Vec<String>,
    pub reviewer_ids: Vec<u64>,
    pub repo_id: u64,
}

/// 리뷰 생성 호출 결과. 식별자가 없으면 전송이 성공했어도 실패로 본다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewResult {
    Created { review_id: u64 },
    Rejected { raw: String },
}

/// 오케스트레이터의 최종 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushReviewOutcome {
    /// `--rr none`: 리뷰 없이 push만 수행
    Bypassed,
    ReviewCreated { review_id: u64, review_url: String },
    /// push는 끝났지만 리뷰 생성이 실패한 경우(경고)
    ReviewFailed { detail: String },
}

impl PushReviewOutcome {
    /// hg 확장 관례를 따르는 종료 코드.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Bypassed | Self::ReviewCreated { .. } => 1,
            Self::ReviewFailed { .. } => 0,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
