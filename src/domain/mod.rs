//! # Domain Layer Module
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 저장소 행(User)과 신규 사용자/프로필 패치 값 객체
//! └── dto       - 요청/응답 DTO와 응답 봉투
//!      │
//!      ▼
//! Service Layer
//!      │
//!      ▼
//! Repository Layer
//! ```
//!
//! 엔티티는 외부로 직접 직렬화되지 않습니다. 응답은 항상 DTO 투영을 거치므로
//! 비밀번호 해시와 내부 식별자가 노출되지 않습니다.

pub mod dto;
pub mod entities;
