//! # Route Table
//!
//! 모든 API는 `/api` 아래에 마운트됩니다.
//!
//! ```text
//! GET  /health
//! POST /api/auth/register
//! POST /api/auth/login
//! POST /api/auth/login/verify-code
//! POST /api/password-recovery/request
//! GET  /api/users/profile
//! PUT  /api/users/profile
//! ```
//!
//! JSON 본문 파싱 실패는 `JsonConfig` 에러 핸들러에서
//! `AppError::ValidationError`로 바뀌어 응답 봉투 형식의 400이 됩니다.

use actix_web::{HttpResponse, get, web};
use serde_json::json;

use crate::{errors::AppError, handlers, state::AppState};

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());
    cfg.service(health_check);

    cfg.service(
        web::scope("/api")
            .configure(configure_auth_routes)
            .configure(configure_user_routes)
            .configure(configure_password_recovery_routes),
    );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("请求体格式不正确: {}", err)).into()
    })
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(handlers::auth::register)
            .service(handlers::auth::login)
            .service(handlers::auth::send_login_verification_code),
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::get_profile)
            .service(handlers::users::update_profile),
    );
}

fn configure_password_recovery_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/password-recovery").service(handlers::password_recovery::request_password_recovery),
    );
}

#[get("/health")]
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "account_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "storage": state.storage.as_str()
    }))
}
