//! # Authentication HTTP Handlers
//!
//! | 메서드 | 경로 | 성공 시 `data` |
//! |--------|------|----------------|
//! | `POST` | `/auth/register` | 공개 프로필 |
//! | `POST` | `/auth/login` | `{token, user}` |
//! | `POST` | `/auth/login/verify-code` | `{account}` |

use actix_web::{HttpResponse, post, web};
use validator::Validate;

use crate::{
    domain::dto::users::request::{LoginRequest, LoginVerifyCodeRequest, RegisterRequest},
    errors::AppError,
    state::AppState,
};

/// 회원가입
///
/// 형식 검증(이메일, 숫자 전화번호, 사용자명 길이) 실패는 400,
/// 비밀번호 불일치나 중복은 200 + 비즈니스 코드입니다.
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = state.auth.register(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.auth.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[post("/login/verify-code")]
pub async fn send_login_verification_code(
    state: web::Data<AppState>,
    payload: web::Json<LoginVerifyCodeRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .auth
        .send_login_verification_code(payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
