//! 에러 처리 모듈
//!
//! [`AppError`]와 [`AppResult`], 그리고 외부 라이브러리 에러를 내부 장애로 바꾸는 [`ErrorContext`]를 제공합니다.

pub mod errors;

pub use errors::*;
