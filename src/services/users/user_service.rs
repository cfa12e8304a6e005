//! # 프로필 서비스
//!
//! `Authorization` 헤더로 현재 사용자를 결정하고 프로필을 조회/수정합니다.
//! 사용자 결정 규칙은 [`ProfileResolver`]를 따르므로 헤더가 없거나 잘못되어도
//! 에러 없이 어떤 사용자의 프로필이든 반환합니다.

use std::sync::Arc;

use log::info;

use super::ProfileResolver;
use crate::{
    domain::{
        dto::{
            common::ApiResponse,
            users::{request::UserProfileUpdateRequest, response::UserProfileResponse},
        },
        entities::users::user::ProfilePatch,
    },
    errors::{AppError, AppResult},
    repositories::users::UserStore,
    services::auth::TokenService,
};

pub struct UserService {
    store: Arc<dyn UserStore>,
    resolver: ProfileResolver,
    tokens: TokenService,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, resolver: ProfileResolver, tokens: TokenService) -> Self {
        Self {
            store,
            resolver,
            tokens,
        }
    }

    /// 현재 사용자의 공개 프로필
    pub async fn get_profile(
        &self,
        authorization: Option<&str>,
    ) -> AppResult<ApiResponse<UserProfileResponse>> {
        let username = self.tokens.decode(authorization);
        let user = self
            .resolver
            .resolve_or_initialize(username.as_deref())
            .await?;

        Ok(ApiResponse::ok(UserProfileResponse::from(user)))
    }

    /// 현재 사용자의 프로필을 부분 수정합니다.
    ///
    /// 요청에 없는 필드는 그대로 두며, 아무 필드도 없으면 저장소에 쓰지 않습니다.
    pub async fn update_profile(
        &self,
        authorization: Option<&str>,
        request: UserProfileUpdateRequest,
    ) -> AppResult<ApiResponse<UserProfileResponse>> {
        let username = self.tokens.decode(authorization);
        let user = self
            .resolver
            .resolve_or_initialize(username.as_deref())
            .await?;

        let patch = ProfilePatch::from(request);
        if patch.is_empty() {
            return Ok(ApiResponse::ok(UserProfileResponse::from(user)));
        }

        let updated = self
            .store
            .update_profile(user.id, &patch)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!("프로필 수정 중 사용자가 사라졌습니다: id={}", user.id))
            })?;

        info!("✏️ 프로필 수정: {}", updated.username);
        Ok(ApiResponse::ok(UserProfileResponse::from(updated)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::user::NewUser;
    use crate::repositories::users::InMemoryUserRepository;
    use crate::services::auth::PasswordHasher;
    use crate::services::users::DEMO_USERNAME;

    fn service(store: Arc<InMemoryUserRepository>) -> UserService {
        let resolver = ProfileResolver::new(store.clone(), PasswordHasher::with_cost(4));
        UserService::new(store, resolver, TokenService::new())
    }

    fn user(username: &str, id_number: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            hashed_password: "digest".to_string(),
            real_name: Some(username.to_uppercase()),
            id_type: "id_card".to_string(),
            id_number: id_number.to_string(),
            phone: "13800138000".to_string(),
            email: format!("{}@example.com", username),
            user_type: "adult".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_get_profile_without_header_creates_demo_user() {
        let service = service(Arc::new(InMemoryUserRepository::new()));

        let response = service.get_profile(None).await.unwrap();

        assert_eq!(response.code, 0);
        assert_eq!(response.data.unwrap().username, DEMO_USERNAME);
    }

    #[actix_web::test]
    async fn test_get_profile_uses_bearer_token() {
        let store = Arc::new(InMemoryUserRepository::new());
        store.insert(user("alice", "A1")).await.unwrap();
        store.insert(user("bob", "B1")).await.unwrap();
        let service = service(store);

        let response = service
            .get_profile(Some("Bearer username:bob"))
            .await
            .unwrap();

        assert_eq!(response.data.unwrap().username, "bob");
    }

    #[actix_web::test]
    async fn test_invalid_header_falls_back_to_first_user() {
        let store = Arc::new(InMemoryUserRepository::new());
        store.insert(user("alice", "A1")).await.unwrap();
        store.insert(user("bob", "B1")).await.unwrap();
        let service = service(store);

        let response = service
            .get_profile(Some("Basic username:bob"))
            .await
            .unwrap();

        assert_eq!(response.data.unwrap().username, "alice");
    }

    #[actix_web::test]
    async fn test_partial_update_leaves_other_fields() {
        let store = Arc::new(InMemoryUserRepository::new());
        store.insert(user("alice", "A1")).await.unwrap();
        let service = service(store);
        let request = UserProfileUpdateRequest {
            real_name: Some("测试用户B".to_string()),
            ..Default::default()
        };

        let first = service.update_profile(None, request.clone()).await.unwrap();
        let second = service.update_profile(None, request).await.unwrap();
        let fetched = service.get_profile(None).await.unwrap().data.unwrap();

        assert_eq!(first.data, second.data);
        assert_eq!(fetched.real_name.as_deref(), Some("测试用户B"));
        assert_eq!(fetched.phone, "13800138000");
        assert_eq!(fetched.email, "alice@example.com");
        assert_eq!(fetched.user_type, "adult");
    }

    #[actix_web::test]
    async fn test_update_targets_token_user() {
        let store = Arc::new(InMemoryUserRepository::new());
        store.insert(user("alice", "A1")).await.unwrap();
        store.insert(user("bob", "B1")).await.unwrap();
        let service = service(store.clone());

        let response = service
            .update_profile(
                Some("Bearer username:bob"),
                UserProfileUpdateRequest {
                    phone: Some("13900139000".to_string()),
                    email: Some("student@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let data = response.data.unwrap();
        assert_eq!(data.username, "bob");
        assert_eq!(data.phone, "13900139000");
        assert_eq!(
            store.find_by_username("alice").await.unwrap().unwrap().phone,
            "13800138000"
        );
    }

    #[actix_web::test]
    async fn test_empty_update_returns_current_profile() {
        let store = Arc::new(InMemoryUserRepository::new());
        store.insert(user("alice", "A1")).await.unwrap();
        let service = service(store);

        let response = service
            .update_profile(None, UserProfileUpdateRequest::default())
            .await
            .unwrap();

        assert_eq!(response.code, 0);
        assert_eq!(response.data.unwrap().real_name.as_deref(), Some("ALICE"));
    }
}
