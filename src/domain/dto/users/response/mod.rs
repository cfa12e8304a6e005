//! # 사용자 관련 응답 DTO 모듈
//!
//! 응답 DTO는 항상 [`ApiResponse`](crate::domain::dto::common::ApiResponse)의
//! `data` 필드에 담겨 전달됩니다. 엔티티를 직접 직렬화하지 않고
//! `From<User>` 변환을 통해 노출 가능한 필드만 복사합니다.

pub mod user_response;

pub use user_response::{AccountResponse, LoginResponse, UserProfileResponse};
