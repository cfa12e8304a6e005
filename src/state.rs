//! 핸들러에 주입되는 애플리케이션 상태
//!
//! 시작 시 한 번 조립되어 `web::Data<AppState>`로 모든 워커에 공유됩니다.
//! 서비스들은 같은 [`UserStore`] 인스턴스를 공유합니다.

use std::sync::Arc;

use crate::{
    config::StorageBackend,
    repositories::users::UserStore,
    services::{
        auth::{AuthService, PasswordHasher, TokenService},
        users::{ProfileResolver, UserService},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub users: Arc<UserService>,
    /// `/health` 응답에 표시되는 저장소 종류
    pub storage: StorageBackend,
}

impl AppState {
    /// 저장소와 해셔로 서비스 그래프를 조립합니다.
    ///
    /// ```rust,ignore
    /// let state = AppState::new(
    ///     Arc::new(InMemoryUserRepository::new()),
    ///     PasswordHasher::from_config(),
    ///     StorageBackend::Memory,
    /// );
    /// App::new().app_data(web::Data::new(state));
    /// ```
    pub fn new(store: Arc<dyn UserStore>, hasher: PasswordHasher, storage: StorageBackend) -> Self {
        let tokens = TokenService::new();
        let resolver = ProfileResolver::new(store.clone(), hasher);

        Self {
            auth: Arc::new(AuthService::new(store.clone(), hasher, tokens)),
            users: Arc::new(UserService::new(store, resolver, tokens)),
            storage,
        }
    }
}
