//! 사용자 엔티티
//!
//! `users` 컬렉션의 한 행(document)을 표현합니다. 식별자는 숫자형이며
//! 저장소가 삽입 시점에 할당합니다 (MongoDB는 `counters` 컬렉션, 메모리 저장소는 내부 카운터).
//!
//! `hashed_password`는 저장소 밖으로 노출되지 않습니다. 외부 응답은 항상
//! [`UserProfileResponse`](crate::domain::dto::users::response::UserProfileResponse)
//! 투영을 거칩니다.

use serde::{Deserialize, Serialize};

/// 저장된 사용자 레코드
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: i64,
    /// 고유, 최대 30자
    pub username: String,
    pub hashed_password: String,
    #[serde(default)]
    pub real_name: Option<String>,
    pub id_type: String,
    /// 고유
    pub id_number: String,
    pub phone: String,
    pub email: String,
    pub user_type: String,
}

/// 아직 식별자가 할당되지 않은 신규 사용자
///
/// 비밀번호는 이미 해싱된 상태여야 합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub hashed_password: String,
    pub real_name: Option<String>,
    pub id_type: String,
    pub id_number: String,
    pub phone: String,
    pub email: String,
    pub user_type: String,
}

impl NewUser {
    /// 저장소가 할당한 식별자로 [`User`]를 완성합니다.
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            username: self.username,
            hashed_password: self.hashed_password,
            real_name: self.real_name,
            id_type: self.id_type,
            id_number: self.id_number,
            phone: self.phone,
            email: self.email,
            user_type: self.user_type,
        }
    }
}

/// 프로필 부분 수정 내용
///
/// `None`인 필드는 변경하지 않습니다. 같은 패치를 두 번 적용해도 결과는 같습니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePatch {
    pub real_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub user_type: Option<String>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.real_name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.user_type.is_none()
    }

    /// 존재하는 필드만 사용자에게 덮어씁니다.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(real_name) = &self.real_name {
            user.real_name = Some(real_name.clone());
        }
        if let Some(phone) = &self.phone {
            user.phone = phone.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(user_type) = &self.user_type {
            user.user_type = user_type.clone();
        }
    }
}
