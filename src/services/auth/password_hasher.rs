//! bcrypt 비밀번호 해싱
//!
//! cost는 [`PasswordConfig::bcrypt_cost`]에서 결정됩니다. 해싱이나 검증 자체가
//! 실패하는 경우(손상된 해시 등)는 인프라 장애로 취급합니다.

use crate::config::PasswordConfig;
use crate::errors::{AppResult, ErrorContext};

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// 환경 설정의 bcrypt cost를 사용합니다.
    pub fn from_config() -> Self {
        Self::with_cost(PasswordConfig::bcrypt_cost())
    }

    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn hash(&self, password: &str) -> AppResult<String> {
        let start = std::time::Instant::now();

        let digest = bcrypt::hash(password, self.cost).context("비밀번호 해싱 실패")?;

        log::debug!("Password hashing took: {:?}", start.elapsed());
        Ok(digest)
    }

    pub fn verify(&self, password: &str, digest: &str) -> AppResult<bool> {
        bcrypt::verify(password, digest).context("비밀번호 검증 실패")
    }
}
