//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`UserStore`] trait에만 의존하고, 실제 저장소는 시작 시
//! `STORAGE_BACKEND` 설정에 따라 선택됩니다.
//!
//! - [`MongoUserRepository`] - MongoDB `users` 컬렉션 (기본값)
//! - [`InMemoryUserRepository`] - 프로세스 메모리 (개발, 테스트용)
//!
//! 두 구현 모두 `username`, `id_number` 유니크 제약을 보장하며, 위반 시
//! `AppError::ConflictError`를 반환합니다. 조회 결과가 여러 개일 수 있는
//! 연산은 항상 식별자 오름차순 첫 번째 행을 돌려줍니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserRepository, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(InMemoryUserRepository::new());
//! let user = store.find_by_login_identifier("alice@example.com").await?;
//! ```

pub mod memory_repo;
pub mod user_repo;

#[cfg(test)]
pub(crate) mod test_support;

pub use memory_repo::InMemoryUserRepository;
pub use user_repo::MongoUserRepository;

use async_trait::async_trait;

use crate::domain::entities::users::user::{NewUser, ProfilePatch, User};
use crate::errors::AppResult;

/// 사용자 저장소 포트
///
/// 각 호출은 저장소 연결을 호출 기간 동안만 빌려 쓰며, 어떤 경로로 반환되든
/// 연결은 소유권 해제와 함께 반납됩니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    async fn find_by_id_number(&self, id_number: &str) -> AppResult<Option<User>>;

    /// 사용자명, 이메일, 휴대폰 번호 중 하나가 일치하는 첫 번째 사용자
    async fn find_by_login_identifier(&self, identifier: &str) -> AppResult<Option<User>>;

    /// 사용자명 또는 휴대폰 번호가 일치하는 첫 번째 사용자
    async fn find_by_username_or_phone(&self, value: &str) -> AppResult<Option<User>>;

    /// 식별자가 가장 작은 사용자
    async fn find_first(&self) -> AppResult<Option<User>>;

    /// 다음 식별자를 할당해 저장합니다.
    ///
    /// 유니크 제약 위반은 `AppError::ConflictError`입니다.
    async fn insert(&self, user: NewUser) -> AppResult<User>;

    /// 패치의 존재하는 필드만 덮어쓰고 갱신된 사용자를 반환합니다.
    ///
    /// 해당 식별자의 사용자가 없으면 `None`입니다.
    async fn update_profile(&self, id: i64, patch: &ProfilePatch) -> AppResult<Option<User>>;
}
