//! # Bearer 토큰 코덱
//!
//! 사용자명을 평문으로 담은 토큰을 만들고, `Authorization` 헤더에서 다시
//! 사용자명을 꺼냅니다. 서명이나 만료가 없는 자리표시자 토큰이므로 서버 측
//! 세션 저장소가 필요하지 않습니다.
//!
//! ```text
//! encode("alice")                         → "username:alice"
//! decode(Some("Bearer username:alice"))   → Some("alice")
//! decode(Some("Basic dXNlcjpwYXNz"))      → None
//! ```
//!
//! 토큰 구성 방식을 서명 토큰으로 바꾸더라도 `encode`/`decode` 인터페이스와
//! bearer 스킴 규칙은 그대로 유지해야 합니다.

/// 토큰 앞에 붙는 식별 접두사
pub const TOKEN_PREFIX: &str = "username:";

const BEARER_SCHEME: &str = "bearer";

#[derive(Debug, Clone, Copy, Default)]
pub struct TokenService;

impl TokenService {
    pub fn new() -> Self {
        Self
    }

    /// 사용자명으로 토큰을 생성합니다.
    pub fn encode(&self, username: &str) -> String {
        format!("{}{}", TOKEN_PREFIX, username)
    }

    /// `Authorization` 헤더 값에서 사용자명을 복원합니다.
    ///
    /// 다음 중 하나라도 해당하면 `None`을 반환하며, 절대 에러를 내지 않습니다.
    ///
    /// - 헤더 없음
    /// - 공백으로 나눈 결과가 정확히 두 부분이 아님
    /// - 스킴이 `bearer`가 아님 (대소문자 무시)
    /// - 토큰에 접두사가 없거나 접두사 뒤가 비어 있음
    pub fn decode(&self, authorization: Option<&str>) -> Option<String> {
        let mut parts = authorization?.split_ascii_whitespace();

        let scheme = parts.next()?;
        let token = parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
            return None;
        }

        token
            .strip_prefix(TOKEN_PREFIX)
            .filter(|username| !username.is_empty())
            .map(str::to_string)
    }
}
