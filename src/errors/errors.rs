//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 이 서비스의 실패는 두 계층으로 나뉩니다.
//!
//! | 계층 | 표현 | HTTP 상태 |
//! |------|------|-----------|
//! | 비즈니스 실패 (중복 가입, 잘못된 자격 증명 등) | `ApiResponse { code != 0 }` | 200 OK |
//! | 인프라 장애 (DB 오류, 제약 조건 충돌, 스키마 검증 실패) | [`AppError`] | 4xx / 5xx |
//!
//! 비즈니스 실패는 절대 `AppError`로 표현하지 않습니다. `AppError`는
//! `actix_web::ResponseError`를 통해 응답 봉투(`{code, message, data}`) 형태로
//! 변환되며, 5xx 응답에는 내부 원인을 노출하지 않고 로그에만 기록합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! let user = collection.find_one(doc! { "username": name }).await
//!     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 스키마 검증 실패 응답 코드
pub const VALIDATION_ERROR_CODE: i32 = 42200;
/// 사전 검사되지 않은 제약 조건 충돌 응답 코드
pub const CONFLICT_ERROR_CODE: i32 = 40900;
/// 내부 서버 오류 응답 코드
pub const INTERNAL_ERROR_CODE: i32 = 50000;

/// 애플리케이션 전역 에러 타입
///
/// 요청 처리 중 발생하는 인프라 수준의 장애를 표현합니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 요청 스키마 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 유니크 제약 조건 위반 (409 Conflict)
    ///
    /// 사전 중복 검사를 통과한 뒤 동시 삽입 경쟁으로 발생하는 충돌입니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 봉투에 들어갈 코드
    pub fn code(&self) -> i32 {
        match self {
            AppError::ValidationError(_) => VALIDATION_ERROR_CODE,
            AppError::ConflictError(_) => CONFLICT_ERROR_CODE,
            AppError::DatabaseError(_) | AppError::InternalError(_) => INTERNAL_ERROR_CODE,
        }
    }

    /// 클라이언트에게 노출해도 되는 메시지
    ///
    /// 검증 에러만 상세 내용을 그대로 전달하고, 나머지는 고정 문구를 사용합니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(msg) => msg.clone(),
            AppError::ConflictError(_) => "数据冲突，请重试".to_string(),
            AppError::DatabaseError(_) | AppError::InternalError(_) => "服务器内部错误".to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 성공 응답과 같은 봉투 형식을 따릅니다:
    ///
    /// ```json
    /// { "code": 50000, "message": "服务器内部错误", "data": null }
    /// ```
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 중 장애 발생: {}", self);
        } else {
            log::warn!("요청 거부: {}", self);
        }

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "code": self.code(),
            "message": self.public_message(),
            "data": null
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 `AppError::InternalError`로 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
