//! 계정 관리 서비스 백엔드
//!
//! 회원가입, 로그인(사용자명/이메일/휴대폰 번호 + 비밀번호), 로그인 인증번호 발송(시뮬레이션),
//! 프로필 조회/수정, 비밀번호 재설정 요청(시뮬레이션)을 제공하는 actix-web 서비스입니다.
//!
//! # Features
//!
//! - **통일된 응답 봉투**: 모든 응답은 `{code, message, data}` 형식
//! - **두 계층 에러**: 비즈니스 실패는 HTTP 200 + 코드, 인프라 장애만 4xx/5xx
//! - **저장소 선택**: MongoDB 또는 인메모리 (`STORAGE_BACKEND`)
//! - **bcrypt**: 환경별 cost로 비밀번호 해싱
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/auth, /api/users, /api/password-recovery
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 역직렬화, 스키마 검증
//! └─────────────────┘
//!          │  web::Data<AppState>
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← AuthService, UserService, ProfileResolver
//! └─────────────────┘
//!          │  Arc<dyn UserStore>
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← MongoDB / 인메모리
//! └─────────────────┘
//! ```
//!
//! 서비스는 전역 싱글톤 레지스트리에 등록하지 않고 `main`에서 한 번 조립해
//! `web::Data<AppState>`로 주입합니다. 테스트는 각자 격리된 저장소로
//! [`state::AppState`]를 만들어 씁니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use account_service_backend::config::StorageBackend;
//! use account_service_backend::repositories::users::InMemoryUserRepository;
//! use account_service_backend::services::auth::PasswordHasher;
//! use account_service_backend::state::AppState;
//!
//! let state = AppState::new(
//!     Arc::new(InMemoryUserRepository::new()),
//!     PasswordHasher::from_config(),
//!     StorageBackend::Memory,
//! );
//! let response = state.users.get_profile(None).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
