//! # Configuration Module
//!
//! 계정 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수에서 읽으며, 시작 시 `PROFILE`에 맞는
//! `.env` 파일이 먼저 로드됩니다 (`main.rs` 참고).
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, bcrypt cost, 서버 바인딩, 저장소 선택, MongoDB 연결
//! - [`http_config`] - CORS 허용 Origin, Rate Limiting
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export SERVER_WORKERS="4"
//!
//! # 저장소 설정
//! export STORAGE_BACKEND="mongodb"     # mongodb | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="rail_account_dev"
//!
//! # 보안 설정
//! export ENVIRONMENT="production"      # development, test, staging, production
//! export BCRYPT_COST="12"              # 4-15 범위
//!
//! # HTTP 설정
//! export CORS_ALLOWED_ORIGINS="http://localhost:5173"
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```

pub mod data_config;
pub mod http_config;

pub use data_config::*;
pub use http_config::*;
