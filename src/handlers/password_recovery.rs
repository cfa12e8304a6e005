//! 비밀번호 찾기 핸들러

use actix_web::{HttpResponse, post, web};
use validator::Validate;

use crate::{
    domain::dto::users::request::PasswordRecoveryRequest, errors::AppError, state::AppState,
};

/// 재설정 링크 발송 (시뮬레이션, 항상 성공)
#[post("/request")]
pub async fn request_password_recovery(
    state: web::Data<AppState>,
    payload: web::Json<PasswordRecoveryRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = state.auth.request_password_recovery(payload.into_inner());

    Ok(HttpResponse::Ok().json(response))
}
