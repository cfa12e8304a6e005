//! # Profile HTTP Handlers
//!
//! `Authorization: Bearer <token>` 헤더는 선택입니다. 헤더가 없거나 해석할 수
//! 없으면 첫 번째 사용자(없으면 데모 사용자)의 프로필을 다룹니다.

use actix_web::{HttpRequest, HttpResponse, get, put, web};
use validator::Validate;

use super::authorization_header;
use crate::{
    domain::dto::users::request::UserProfileUpdateRequest, errors::AppError, state::AppState,
};

#[get("/profile")]
pub async fn get_profile(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let response = state.users.get_profile(authorization_header(&req)).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 프로필 부분 수정 (`real_name`, `phone`, `email`, `user_type`)
#[put("/profile")]
pub async fn update_profile(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: web::Json<UserProfileUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = state
        .users
        .update_profile(authorization_header(&req), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
