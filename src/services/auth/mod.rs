//! 인증 관련 서비스
//!
//! - [`TokenService`] - bearer 토큰 인코딩/디코딩
//! - [`PasswordHasher`] - bcrypt 해싱/검증
//! - [`AuthService`] - 회원가입, 로그인, 로그인 인증번호

pub mod auth_service;
pub mod password_hasher;
pub mod token_service;

pub use auth_service::*;
pub use password_hasher::*;
pub use token_service::*;
