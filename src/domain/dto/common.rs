//! 공통 응답 봉투
//!
//! 모든 엔드포인트는 `{code, message, data}` 형태로 응답합니다.
//! `code == 0`이면 성공이며, 0이 아닌 코드는 비즈니스 실패입니다.
//! 비즈니스 실패여도 HTTP 상태는 200을 유지합니다.
//!
//! ```json
//! { "code": 40010, "message": "用户名或密码错误", "data": null }
//! ```

use serde::{Deserialize, Serialize};

/// 성공 응답의 기본 메시지
pub const SUCCESS_MESSAGE: &str = "ok";

/// 비즈니스 실패 코드
///
/// 예상 가능한 사용자 입력 문제를 나타내며, 절대 `AppError`로 전파되지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessCode {
    PasswordMismatch,
    UsernameExists,
    IdNumberExists,
    InvalidCredentials,
    UserNotFound,
    IdSuffixMismatch,
}

impl BusinessCode {
    pub fn code(&self) -> i32 {
        match self {
            BusinessCode::PasswordMismatch => 40000,
            BusinessCode::UsernameExists => 40001,
            BusinessCode::IdNumberExists => 40002,
            BusinessCode::InvalidCredentials => 40010,
            BusinessCode::UserNotFound => 40020,
            BusinessCode::IdSuffixMismatch => 40021,
        }
    }

    /// 클라이언트에 표시되는 메시지
    pub fn message(&self) -> &'static str {
        match self {
            BusinessCode::PasswordMismatch => "两次输入的密码不一致",
            BusinessCode::UsernameExists => "用户名已存在",
            BusinessCode::IdNumberExists => "证件号码已存在",
            BusinessCode::InvalidCredentials => "用户名或密码错误",
            BusinessCode::UserNotFound => "用户不存在",
            BusinessCode::IdSuffixMismatch => "证件号后四位不匹配",
        }
    }
}

/// 응답 봉투
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// `code = 0`, `message = "ok"` 성공 응답
    pub fn ok(data: T) -> Self {
        Self::with_message(data, SUCCESS_MESSAGE)
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            code: 0,
            message: message.into(),
            data: Some(data),
        }
    }

    /// `data = null` 비즈니스 실패 응답
    pub fn business_error(code: BusinessCode) -> Self {
        Self {
            code: code.code(),
            message: code.message().to_string(),
            data: None,
        }
    }
}
