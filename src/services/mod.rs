//! # Service Layer
//!
//! 비즈니스 로직 계층입니다. 핸들러는 서비스만 호출하고, 서비스는
//! [`UserStore`](crate::repositories::users::UserStore)를 통해 저장소에 접근합니다.
//!
//! - [`auth`] - 회원가입, 로그인, 인증번호, 토큰, 비밀번호 해싱
//! - [`users`] - 현재 사용자 결정, 프로필 조회/수정

pub mod auth;
pub mod users;
