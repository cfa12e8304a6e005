//! 프로필 수정 및 비밀번호 찾기 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::auth_request::validate_phone;
use crate::domain::entities::users::user::ProfilePatch;

/// 프로필 부분 수정 요청
///
/// 본문에 없는 필드는 변경하지 않습니다. `{}`도 유효한 요청입니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserProfileUpdateRequest {
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(email(message = "邮箱格式不正确"))]
    pub email: Option<String>,
    #[serde(default)]
    pub user_type: Option<String>,
}

impl From<UserProfileUpdateRequest> for ProfilePatch {
    fn from(request: UserProfileUpdateRequest) -> Self {
        Self {
            real_name: request.real_name,
            phone: request.phone,
            email: request.email,
            user_type: request.user_type,
        }
    }
}

/// 비밀번호 찾기 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PasswordRecoveryRequest {
    /// 사용자명, 이메일 또는 휴대폰 번호
    #[validate(length(min = 1, message = "账号不能为空"))]
    pub account: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_update_body_is_valid() {
        let request: UserProfileUpdateRequest = serde_json::from_str("{}").unwrap();

        assert!(request.validate().is_ok());
        assert!(ProfilePatch::from(request).is_empty());
    }

    #[test]
    fn test_update_validates_present_fields_only() {
        let valid = UserProfileUpdateRequest {
            phone: Some("13900139000".to_string()),
            email: Some("student@example.com".to_string()),
            ..Default::default()
        };
        let invalid = UserProfileUpdateRequest {
            email: Some("student-at-example".to_string()),
            ..Default::default()
        };

        assert!(valid.validate().is_ok());
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_recovery_rejects_empty_account() {
        let request = PasswordRecoveryRequest {
            account: String::new(),
        };

        assert!(request.validate().is_err());
    }
}
