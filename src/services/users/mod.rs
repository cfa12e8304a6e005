//! 사용자 프로필 서비스
//!
//! - [`ProfileResolver`] - 토큰 → 사용자 결정 (필요 시 데모 사용자 생성)
//! - [`UserService`] - 프로필 조회/수정

pub mod profile_resolver;
pub mod user_service;

pub use profile_resolver::*;
pub use user_service::*;
