//! # HTTP Handlers
//!
//! 요청을 역직렬화/검증하고 서비스를 호출해 봉투를 그대로 JSON으로 응답합니다.
//! 비즈니스 실패도 HTTP 200으로 나가며, `Err(AppError)`만 4xx/5xx가 됩니다.
//!
//! | 모듈 | 경로 |
//! |------|------|
//! | [`auth`] | `/api/auth/register`, `/api/auth/login`, `/api/auth/login/verify-code` |
//! | [`users`] | `GET/PUT /api/users/profile` |
//! | [`password_recovery`] | `/api/password-recovery/request` |

pub mod auth;
pub mod password_recovery;
pub mod users;

use actix_web::{HttpRequest, http::header};

/// `Authorization` 헤더 값 (없거나 ASCII가 아니면 `None`)
pub(crate) fn authorization_header(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
}
