//! # Repository Layer
//!
//! 데이터 액세스 계층입니다. 서비스는 저장소 구현이 아닌
//! [`users::UserStore`] trait을 통해서만 데이터에 접근합니다.

pub mod users;
