//! Domain layer
//! 리뷰어/체인지셋/저장소 계층 같은 비즈니스 규칙을 외부 의존성 없이 표현한다.

pub mod error;
pub mod policy;
pub mod repository;
pub mod review;
