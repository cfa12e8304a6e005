use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::User;

/// 공개 프로필 투영
///
/// 비밀번호 해시와 내부 식별자를 제외한 사용자 정보입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfileResponse {
    pub username: String,
    pub real_name: Option<String>,
    pub id_type: String,
    pub id_number: String,
    pub phone: String,
    pub email: String,
    pub user_type: String,
}

impl From<User> for UserProfileResponse {
    fn from(user: User) -> Self {
        let User {
            username,
            real_name,
            id_type,
            id_number,
            phone,
            email,
            user_type,
            ..
        } = user;

        Self {
            username,
            real_name,
            id_type,
            id_number,
            phone,
            email,
            user_type,
        }
    }
}

/// 로그인 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// `Authorization: Bearer <token>` 헤더에 그대로 사용할 토큰
    pub token: String,
    pub user: UserProfileResponse,
}

/// 인증번호 발송, 비밀번호 찾기 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountResponse {
    pub account: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_hides_digest_and_id() {
        let user = User {
            id: 3,
            username: "alice".to_string(),
            hashed_password: "$2b$04$secret".to_string(),
            real_name: None,
            id_type: "id_card".to_string(),
            id_number: "A1".to_string(),
            phone: "13800138000".to_string(),
            email: "alice@example.com".to_string(),
            user_type: "adult".to_string(),
        };

        let value = serde_json::to_value(UserProfileResponse::from(user)).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 7);
        assert!(!object.contains_key("hashed_password"));
        assert!(!object.contains_key("_id"));
        assert!(object["real_name"].is_null());
    }
}
