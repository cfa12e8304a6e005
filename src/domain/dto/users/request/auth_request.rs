//! 인증 요청 DTO
//!
//! 회원가입, 로그인, 로그인 인증번호 요청의 JSON 본문을 정의합니다.
//!
//! 비밀번호 확인 일치 여부는 스키마 규칙이 아니라 비즈니스 규칙(40000)입니다.
//! 따라서 `RegisterRequest`에는 구조체 수준 검증을 두지 않습니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::utils::string_utils::is_ascii_digits;

/// 회원가입 요청
///
/// # JSON 예제
///
/// ```json
/// {
///   "username": "alice",
///   "password": "P123",
///   "confirm_password": "P123",
///   "real_name": "Alice",
///   "id_type": "id_card",
///   "id_number": "110101199001019012",
///   "user_type": "adult",
///   "phone": "13800138000",
///   "email": "alice@example.com"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 30, message = "用户名长度必须在1-30之间"))]
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub real_name: String,
    pub id_type: String,
    pub id_number: String,
    pub user_type: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    #[validate(email(message = "邮箱格式不正确"))]
    pub email: String,
}

/// 로그인 요청
///
/// `username`에는 사용자명, 이메일, 휴대폰 번호 중 무엇이든 들어올 수 있습니다.
/// `id_last4`, `sms_code`는 받아들이지만 사용하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub id_last4: Option<String>,
    #[serde(default)]
    pub sms_code: Option<String>,
}

/// 로그인 인증번호 발송 요청
///
/// 형식 제약이 없으므로 검증 단계를 거치지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginVerifyCodeRequest {
    /// 사용자명 또는 휴대폰 번호
    pub username: String,
    pub id_last4: String,
}

/// 휴대폰 번호는 비어 있지 않은 숫자 문자열이어야 합니다.
pub(crate) fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if !is_ascii_digits(phone) {
        return Err(ValidationError::new("invalid_phone").with_message("手机号格式不正确".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            username: "alice".to_string(),
            password: "P123".to_string(),
            confirm_password: "P123".to_string(),
            real_name: "Alice".to_string(),
            id_type: "id_card".to_string(),
            id_number: "A1".to_string(),
            user_type: "adult".to_string(),
            phone: "13800138000".to_string(),
            email: "alice@example.com".to_string(),
        }
    }

    #[test]
    fn test_valid_register_request() {
        assert!(register_request().validate().is_ok());
    }

    #[test]
    fn test_password_mismatch_is_not_a_schema_error() {
        let request = RegisterRequest {
            confirm_password: "other".to_string(),
            ..register_request()
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_numeric_phone() {
        let request = RegisterRequest {
            phone: "138-0013".to_string(),
            ..register_request()
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone"));
    }

    #[test]
    fn test_rejects_malformed_email() {
        let request = RegisterRequest {
            email: "not-an-email".to_string(),
            ..register_request()
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_rejects_username_longer_than_30_chars() {
        let request = RegisterRequest {
            username: "u".repeat(31),
            ..register_request()
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_login_request_optional_fields_default_to_none() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"username":"alice","password":"P123"}"#).unwrap();

        assert!(request.id_last4.is_none());
        assert!(request.sms_code.is_none());
    }
}
