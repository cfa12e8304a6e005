//! HTTP 계층 설정 모듈
//!
//! 브라우저 프론트엔드를 위한 CORS 허용 Origin과
//! Rate Limiting(actix-governor) 설정을 환경 변수에서 읽어옵니다.

use std::env;
use log::{error, warn};

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 기본 허용 Origin (Vite 개발 서버 및 로컬 프론트엔드)
    pub const DEFAULT_ORIGINS: [&'static str; 4] = [
        "http://localhost:5173",
        "http://127.0.0.1:5173",
        "http://localhost:3000",
        "http://127.0.0.1:3000",
    ];

    /// 허용할 Origin 목록을 반환합니다.
    ///
    /// `CORS_ALLOWED_ORIGINS`에 콤마로 구분된 목록이 있으면 그것을 사용하고,
    /// 없거나 비어 있으면 [`CorsConfig::DEFAULT_ORIGINS`]를 사용합니다.
    /// 와일드카드 `*`는 구체적인 Origin이 아니므로 무시됩니다.
    ///
    /// # Examples
    ///
    /// ```bash
    /// CORS_ALLOWED_ORIGINS="https://rail.example.com,https://admin.rail.example.com"
    /// ```
    pub fn allowed_origins() -> Vec<String> {
        env::var("CORS_ALLOWED_ORIGINS")
            .ok()
            .map(|raw| Self::parse_origins(&raw))
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect())
    }

    fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .filter(|origin| {
                if *origin == "*" {
                    warn!("CORS_ALLOWED_ORIGINS의 와일드카드 `*`는 지원하지 않아 무시합니다");
                    return false;
                }
                true
            })
            .map(str::to_string)
            .collect()
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// 파싱에 실패하면 에러 로그를 남기고 기본값을 사용합니다.
    pub fn from_env() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        Self {
            per_second,
            burst_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_skips_empty_entries() {
        let origins = CorsConfig::parse_origins(" https://a.example.com, ,https://b.example.com ,");

        assert_eq!(
            origins,
            vec![
                "https://a.example.com".to_string(),
                "https://b.example.com".to_string()
            ]
        );
    }

    #[test]
    fn test_parse_origins_drops_wildcard() {
        let origins = CorsConfig::parse_origins("*, https://a.example.com");

        assert_eq!(origins, vec!["https://a.example.com".to_string()]);
        assert!(CorsConfig::parse_origins(" * ").is_empty());
    }

    #[test]
    fn test_default_origins_include_vite_dev_server() {
        assert!(CorsConfig::DEFAULT_ORIGINS.contains(&"http://localhost:5173"));
    }
}
