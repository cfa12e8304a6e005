//! 테스트 전용 저장소 래퍼
//!
//! 사전 조회와 삽입 사이에 다른 요청이 끼어든 상황을 재현합니다.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{InMemoryUserRepository, UserStore};
use crate::domain::entities::users::user::{NewUser, ProfilePatch, User};
use crate::errors::AppResult;

/// 처음 `stale_reads`번의 단건 조회가 빈 결과를 돌려주는 저장소
///
/// `find_by_username`, `find_by_id_number`, `find_first`만 영향을 받고
/// 삽입은 그대로 내부 저장소의 유니크 제약을 따릅니다.
pub(crate) struct StaleReadStore {
    inner: InMemoryUserRepository,
    stale_reads: AtomicUsize,
}

impl StaleReadStore {
    pub(crate) fn new(inner: InMemoryUserRepository, stale_reads: usize) -> Self {
        Self {
            inner,
            stale_reads: AtomicUsize::new(stale_reads),
        }
    }

    fn stale(&self) -> bool {
        self.stale_reads
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

#[async_trait]
impl UserStore for StaleReadStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        if self.stale() {
            return Ok(None);
        }
        self.inner.find_by_username(username).await
    }

    async fn find_by_id_number(&self, id_number: &str) -> AppResult<Option<User>> {
        if self.stale() {
            return Ok(None);
        }
        self.inner.find_by_id_number(id_number).await
    }

    async fn find_by_login_identifier(&self, identifier: &str) -> AppResult<Option<User>> {
        self.inner.find_by_login_identifier(identifier).await
    }

    async fn find_by_username_or_phone(&self, value: &str) -> AppResult<Option<User>> {
        self.inner.find_by_username_or_phone(value).await
    }

    async fn find_first(&self) -> AppResult<Option<User>> {
        if self.stale() {
            return Ok(None);
        }
        self.inner.find_first().await
    }

    async fn insert(&self, user: NewUser) -> AppResult<User> {
        self.inner.insert(user).await
    }

    async fn update_profile(&self, id: i64, patch: &ProfilePatch) -> AppResult<Option<User>> {
        self.inner.update_profile(id, patch).await
    }
}
