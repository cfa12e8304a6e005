//! # 현재 사용자 결정
//!
//! 세션 계층이 없는 상태에서 프로필 엔드포인트가 항상 동작하도록
//! "현재 사용자"를 결정합니다.
//!
//! ```text
//! 토큰의 사용자명으로 조회 ──있음──▶ 그 사용자
//!         │ 없음
//!         ▼
//! 식별자가 가장 작은 사용자 ──있음──▶ 그 사용자
//!         │ 없음 (빈 저장소)
//!         ▼
//! 데모 사용자 생성 후 반환   ← 쓰기 발생
//! ```
//!
//! 조회처럼 보이지만 저장소가 비어 있으면 삽입이 일어나므로 연산 이름을
//! [`ProfileResolver::resolve_or_initialize`]로 둡니다.

use std::sync::Arc;

use log::{info, warn};

use crate::{
    domain::entities::users::user::{NewUser, User},
    errors::{AppError, AppResult},
    repositories::users::UserStore,
    services::auth::PasswordHasher,
};

pub const DEMO_USERNAME: &str = "demo_user";
pub const DEMO_PASSWORD: &str = "Password123";
pub const DEMO_REAL_NAME: &str = "测试用户A";
pub const DEMO_ID_TYPE: &str = "id_card";
pub const DEMO_ID_NUMBER: &str = "123456789012345678";
pub const DEMO_PHONE: &str = "13800138000";
pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_USER_TYPE: &str = "adult";

pub struct ProfileResolver {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
}

impl ProfileResolver {
    pub fn new(store: Arc<dyn UserStore>, hasher: PasswordHasher) -> Self {
        Self { store, hasher }
    }

    /// 사용자를 결정합니다. "사용자 없음"으로 실패하지 않습니다.
    ///
    /// 저장소가 비어 있으면 데모 사용자를 삽입합니다.
    pub async fn resolve_or_initialize(&self, username: Option<&str>) -> AppResult<User> {
        if let Some(username) = username {
            if let Some(user) = self.store.find_by_username(username).await? {
                return Ok(user);
            }
        }

        if let Some(user) = self.store.find_first().await? {
            return Ok(user);
        }

        self.create_demo_user().await
    }

    async fn create_demo_user(&self) -> AppResult<User> {
        let demo = NewUser {
            username: DEMO_USERNAME.to_string(),
            hashed_password: self.hasher.hash(DEMO_PASSWORD)?,
            real_name: Some(DEMO_REAL_NAME.to_string()),
            id_type: DEMO_ID_TYPE.to_string(),
            id_number: DEMO_ID_NUMBER.to_string(),
            phone: DEMO_PHONE.to_string(),
            email: DEMO_EMAIL.to_string(),
            user_type: DEMO_USER_TYPE.to_string(),
        };

        match self.store.insert(demo).await {
            Ok(user) => {
                info!("🧪 빈 저장소에 데모 사용자 생성: {}", user.username);
                Ok(user)
            }
            // 동시 요청이 먼저 데모 사용자를 만든 경우
            Err(AppError::ConflictError(_)) => {
                warn!("데모 사용자 동시 생성 감지, 기존 사용자를 다시 조회합니다");
                self.store.find_first().await?.ok_or_else(|| {
                    AppError::InternalError("데모 사용자 생성 충돌 후 사용자가 없습니다".to_string())
                })
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users::InMemoryUserRepository;
    use crate::repositories::users::test_support::StaleReadStore;

    fn user(username: &str, id_number: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            hashed_password: "digest".to_string(),
            real_name: None,
            id_type: "passport".to_string(),
            id_number: id_number.to_string(),
            phone: "100".to_string(),
            email: format!("{}@example.com", username),
            user_type: "student".to_string(),
        }
    }

    fn resolver(store: Arc<InMemoryUserRepository>) -> ProfileResolver {
        ProfileResolver::new(store, PasswordHasher::with_cost(4))
    }

    #[actix_web::test]
    async fn test_empty_store_creates_demo_user_once() {
        let store = Arc::new(InMemoryUserRepository::new());
        let resolver = resolver(store.clone());

        let first = resolver.resolve_or_initialize(None).await.unwrap();
        let second = resolver.resolve_or_initialize(None).await.unwrap();

        assert_eq!(first.username, DEMO_USERNAME);
        assert_eq!(first.real_name.as_deref(), Some(DEMO_REAL_NAME));
        assert_eq!(first.id_number, DEMO_ID_NUMBER);
        assert_eq!(first.phone, DEMO_PHONE);
        assert_eq!(first.email, DEMO_EMAIL);
        assert_eq!(first.user_type, DEMO_USER_TYPE);
        assert_eq!(first.id, second.id);
        assert!(PasswordHasher::with_cost(4)
            .verify(DEMO_PASSWORD, &first.hashed_password)
            .unwrap());
    }

    #[actix_web::test]
    async fn test_known_username_wins() {
        let store = Arc::new(InMemoryUserRepository::new());
        store.insert(user("alice", "A1")).await.unwrap();
        store.insert(user("bob", "B1")).await.unwrap();

        let resolved = resolver(store)
            .resolve_or_initialize(Some("bob"))
            .await
            .unwrap();

        assert_eq!(resolved.username, "bob");
    }

    #[actix_web::test]
    async fn test_unknown_or_missing_username_falls_back_to_first_user() {
        let store = Arc::new(InMemoryUserRepository::new());
        store.insert(user("alice", "A1")).await.unwrap();
        store.insert(user("bob", "B1")).await.unwrap();
        let resolver = resolver(store.clone());

        let unknown = resolver.resolve_or_initialize(Some("ghost")).await.unwrap();
        let missing = resolver.resolve_or_initialize(None).await.unwrap();

        assert_eq!(unknown.username, "alice");
        assert_eq!(missing.username, "alice");
        assert!(store.find_by_username(DEMO_USERNAME).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_demo_user_created_concurrently_is_reused() {
        let inner = InMemoryUserRepository::new();
        let seeded = inner
            .insert(user(DEMO_USERNAME, DEMO_ID_NUMBER))
            .await
            .unwrap();
        // 빈 저장소로 보인 뒤 삽입은 유니크 제약에 걸린다
        let store = Arc::new(StaleReadStore::new(inner, 1));
        let resolver = ProfileResolver::new(store.clone(), PasswordHasher::with_cost(4));

        let resolved = resolver.resolve_or_initialize(None).await.unwrap();

        assert_eq!(resolved.username, DEMO_USERNAME);
        assert_eq!(resolved.id, seeded.id);
        assert_eq!(store.find_first().await.unwrap().unwrap().id, seeded.id);
    }
}
