//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이에서 오가는 요청/응답 타입입니다.
//!
//! - [`common`] - 응답 봉투 [`ApiResponse`]와 비즈니스 코드 [`BusinessCode`]
//! - [`users`] - 인증, 프로필, 비밀번호 찾기 요청/응답
//!
//! 요청 DTO는 `validator`로 스키마 검증을 수행하며, 검증 실패는
//! 비즈니스 로직에 도달하기 전에 `AppError::ValidationError`가 됩니다.

pub mod common;
pub mod users;

pub use common::{ApiResponse, BusinessCode};
pub use users::*;
