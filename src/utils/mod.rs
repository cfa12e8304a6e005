//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 숫자 문자열 검사, 로그용 식별자 마스킹

pub mod string_utils;
