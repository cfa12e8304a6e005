//! # MongoDB 사용자 리포지토리
//!
//! `users` 컬렉션을 관계형 테이블처럼 사용합니다.
//!
//! - `_id`는 `i64` 정수이며 `counters` 컬렉션의 `$inc` upsert로 원자적으로 할당됩니다.
//! - `username`, `id_number`에는 유니크 인덱스가 걸려 있습니다 ([`MongoUserRepository::create_indexes`]).
//! - 중복 키 에러(코드 11000)는 `AppError::ConflictError`로 변환됩니다.

use async_trait::async_trait;
use mongodb::{
    Collection, IndexModel,
    bson::{Document, doc},
    error::{ErrorKind, WriteFailure},
    options::{IndexOptions, ReturnDocument},
};
use serde::{Deserialize, Serialize};

use super::UserStore;
use crate::{
    db::Database,
    domain::entities::users::user::{NewUser, ProfilePatch, User},
    errors::{AppError, AppResult},
};

const USERS_COLLECTION: &str = "users";
const COUNTERS_COLLECTION: &str = "counters";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 식별자 시퀀스 문서
#[derive(Debug, Serialize, Deserialize)]
struct Counter {
    #[serde(rename = "_id")]
    name: String,
    seq: i64,
}

pub struct MongoUserRepository {
    users: Collection<User>,
    counters: Collection<Counter>,
}

impl MongoUserRepository {
    pub fn new(database: &Database) -> Self {
        let db = database.get_database();

        Self {
            users: db.collection::<User>(USERS_COLLECTION),
            counters: db.collection::<Counter>(COUNTERS_COLLECTION),
        }
    }

    /// 유니크 인덱스를 생성합니다. 이미 존재하면 아무 일도 하지 않습니다.
    ///
    /// ```rust,ignore
    /// let repository = MongoUserRepository::new(&database);
    /// repository.create_indexes().await?;
    /// ```
    pub async fn create_indexes(&self) -> AppResult<()> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("username_unique".to_string())
                    .build(),
            )
            .build();

        let id_number_index = IndexModel::builder()
            .keys(doc! { "id_number": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_number_unique".to_string())
                    .build(),
            )
            .build();

        // 로그인 식별자 조회용
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().name("email_idx".to_string()).build())
            .build();

        let phone_index = IndexModel::builder()
            .keys(doc! { "phone": 1 })
            .options(IndexOptions::builder().name("phone_idx".to_string()).build())
            .build();

        self.users
            .create_indexes([username_index, id_number_index, email_index, phone_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// `counters` 컬렉션에서 다음 사용자 식별자를 가져옵니다.
    async fn next_id(&self) -> AppResult<i64> {
        let counter = self
            .counters
            .find_one_and_update(
                doc! { "_id": USERS_COLLECTION },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        counter
            .map(|c| c.seq)
            .ok_or_else(|| AppError::InternalError("사용자 ID 시퀀스를 할당하지 못했습니다".to_string()))
    }

    /// 필터에 맞는 식별자 오름차순 첫 번째 사용자
    async fn find_first_matching(&self, filter: Document) -> AppResult<Option<User>> {
        self.users
            .find_one(filter)
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

/// 로그인 식별자 필터 (username OR email OR phone)
fn login_identifier_filter(identifier: &str) -> Document {
    doc! {
        "$or": [
            { "username": identifier },
            { "email": identifier },
            { "phone": identifier },
        ]
    }
}

/// 패치에서 `$set` 문서를 만듭니다. 존재하는 필드만 포함됩니다.
fn patch_set_document(patch: &ProfilePatch) -> Document {
    let mut set = Document::new();

    if let Some(real_name) = &patch.real_name {
        set.insert("real_name", real_name.as_str());
    }
    if let Some(phone) = &patch.phone {
        set.insert("phone", phone.as_str());
    }
    if let Some(email) = &patch.email {
        set.insert("email", email.as_str());
    }
    if let Some(user_type) = &patch.user_type {
        set.insert("user_type", user_type.as_str());
    }

    set
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

fn map_write_error(error: mongodb::error::Error) -> AppError {
    if is_duplicate_key(&error) {
        AppError::ConflictError(error.to_string())
    } else {
        AppError::DatabaseError(error.to_string())
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.users
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id_number(&self, id_number: &str) -> AppResult<Option<User>> {
        self.users
            .find_one(doc! { "id_number": id_number })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_login_identifier(&self, identifier: &str) -> AppResult<Option<User>> {
        self.find_first_matching(login_identifier_filter(identifier))
            .await
    }

    async fn find_by_username_or_phone(&self, value: &str) -> AppResult<Option<User>> {
        self.find_first_matching(doc! {
            "$or": [ { "username": value }, { "phone": value } ]
        })
        .await
    }

    async fn find_first(&self) -> AppResult<Option<User>> {
        self.find_first_matching(doc! {}).await
    }

    async fn insert(&self, user: NewUser) -> AppResult<User> {
        let id = self.next_id().await?;
        let user = user.into_user(id);

        self.users
            .insert_one(&user)
            .await
            .map_err(map_write_error)?;

        Ok(user)
    }

    async fn update_profile(&self, id: i64, patch: &ProfilePatch) -> AppResult<Option<User>> {
        if patch.is_empty() {
            return self
                .users
                .find_one(doc! { "_id": id })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()));
        }

        self.users
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$set": patch_set_document(patch) },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_write_error)
    }
}
