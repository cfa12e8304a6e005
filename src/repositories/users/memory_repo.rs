//! # 인메모리 사용자 리포지토리
//!
//! `STORAGE_BACKEND=memory`일 때 사용하는 저장소입니다. 프로세스가 재시작되면
//! 모든 데이터가 사라집니다. 테스트에서도 이 구현을 사용합니다.
//!
//! 사용자 목록은 삽입 순서(= 식별자 오름차순)로 유지되므로 "첫 번째 일치"는
//! 단순 선형 탐색으로 얻습니다.

use std::sync::RwLock;

use async_trait::async_trait;

use super::UserStore;
use crate::{
    domain::entities::users::user::{NewUser, ProfilePatch, User},
    errors::{AppError, AppResult, ErrorContext},
};

#[derive(Default)]
struct Table {
    rows: Vec<User>,
    last_id: i64,
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    table: RwLock<Table>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn find_first_where<F>(&self, predicate: F) -> AppResult<Option<User>>
    where
        F: Fn(&User) -> bool,
    {
        let table = self
            .table
            .read()
            .context("사용자 테이블 읽기 잠금 실패")?;

        Ok(table.rows.iter().find(|user| predicate(user)).cloned())
    }
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.find_first_where(|user| user.username == username)
    }

    async fn find_by_id_number(&self, id_number: &str) -> AppResult<Option<User>> {
        self.find_first_where(|user| user.id_number == id_number)
    }

    async fn find_by_login_identifier(&self, identifier: &str) -> AppResult<Option<User>> {
        self.find_first_where(|user| {
            user.username == identifier || user.email == identifier || user.phone == identifier
        })
    }

    async fn find_by_username_or_phone(&self, value: &str) -> AppResult<Option<User>> {
        self.find_first_where(|user| user.username == value || user.phone == value)
    }

    async fn find_first(&self) -> AppResult<Option<User>> {
        self.find_first_where(|_| true)
    }

    async fn insert(&self, user: NewUser) -> AppResult<User> {
        let mut table = self
            .table
            .write()
            .context("사용자 테이블 쓰기 잠금 실패")?;

        if table.rows.iter().any(|row| row.username == user.username) {
            return Err(AppError::ConflictError(format!(
                "duplicate key: username={}",
                user.username
            )));
        }
        if table.rows.iter().any(|row| row.id_number == user.id_number) {
            return Err(AppError::ConflictError("duplicate key: id_number".to_string()));
        }

        table.last_id += 1;
        let user = user.into_user(table.last_id);
        table.rows.push(user.clone());

        Ok(user)
    }

    async fn update_profile(&self, id: i64, patch: &ProfilePatch) -> AppResult<Option<User>> {
        let mut table = self
            .table
            .write()
            .context("사용자 테이블 쓰기 잠금 실패")?;

        Ok(table.rows.iter_mut().find(|row| row.id == id).map(|row| {
            patch.apply_to(row);
            row.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str, id_number: &str, phone: &str, email: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            hashed_password: "digest".to_string(),
            real_name: None,
            id_type: "id_card".to_string(),
            id_number: id_number.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            user_type: "adult".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.insert(new_user("alice", "A1", "1001", "a@x.com")).await.unwrap();
        let second = repo.insert(new_user("bob", "B1", "1002", "b@x.com")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.find_first().await.unwrap().unwrap().username, "alice");
    }

    #[actix_web::test]
    async fn test_insert_rejects_duplicate_unique_fields() {
        let repo = InMemoryUserRepository::new();
        repo.insert(new_user("alice", "A1", "1001", "a@x.com")).await.unwrap();

        let same_username = repo.insert(new_user("alice", "Z9", "1002", "z@x.com")).await;
        let same_id_number = repo.insert(new_user("carol", "A1", "1003", "c@x.com")).await;

        assert!(matches!(same_username, Err(AppError::ConflictError(_))));
        assert!(matches!(same_id_number, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_login_identifier_prefers_lowest_id() {
        let repo = InMemoryUserRepository::new();
        repo.insert(new_user("alice", "A1", "1001", "shared@x.com")).await.unwrap();
        repo.insert(new_user("bob", "B1", "1002", "shared@x.com")).await.unwrap();

        let by_email = repo.find_by_login_identifier("shared@x.com").await.unwrap();
        let by_phone = repo.find_by_login_identifier("1002").await.unwrap();

        assert_eq!(by_email.unwrap().username, "alice");
        assert_eq!(by_phone.unwrap().username, "bob");
        assert!(repo.find_by_login_identifier("nobody").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_username_or_phone_ignores_email() {
        let repo = InMemoryUserRepository::new();
        repo.insert(new_user("alice", "A1", "1001", "a@x.com")).await.unwrap();

        assert!(repo.find_by_username_or_phone("1001").await.unwrap().is_some());
        assert!(repo.find_by_username_or_phone("a@x.com").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_update_profile_applies_patch() {
        let repo = InMemoryUserRepository::new();
        let user = repo.insert(new_user("alice", "A1", "1001", "a@x.com")).await.unwrap();
        let patch = ProfilePatch {
            phone: Some("1999".to_string()),
            ..Default::default()
        };

        let updated = repo.update_profile(user.id, &patch).await.unwrap().unwrap();

        assert_eq!(updated.phone, "1999");
        assert_eq!(updated.email, "a@x.com");
        assert_eq!(repo.find_by_username("alice").await.unwrap().unwrap().phone, "1999");
        assert!(repo.update_profile(42, &patch).await.unwrap().is_none());
    }
}
