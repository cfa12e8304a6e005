//! # Domain Entities Module
//!
//! 저장소에 영속되는 엔티티입니다. `users` 컬렉션(또는 인메모리 테이블)의
//! 한 행이 [`users::user::User`] 하나에 대응합니다.

pub mod users;
