//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 본문을 구조화된 Rust 타입으로 변환하고
//! `validator` 크레이트로 형식 규칙을 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`JsonConfig` 에러 핸들러)
//! 2. **형식 검증**: 이메일, 길이, 숫자 전화번호 (`Validate`)
//! 3. **비즈니스 검증**: 비밀번호 확인, 중복 확인 (서비스 계층, 봉투 코드로 응답)
//!
//! 1, 2단계 실패는 `AppError::ValidationError`로 변환되어 HTTP 400이 됩니다.

pub mod auth_request;
pub mod profile_request;

pub use auth_request::{LoginRequest, LoginVerifyCodeRequest, RegisterRequest};
pub use profile_request::{PasswordRecoveryRequest, UserProfileUpdateRequest};
