//! Users Entity Module
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::{NewUser, ProfilePatch};
//!
//! let user = store.insert(NewUser { username: "alice".into(), /* ... */ }).await?;
//!
//! let patch = ProfilePatch { real_name: Some("Alice".into()), ..Default::default() };
//! store.update_profile(user.id, &patch).await?;
//! ```

pub mod user;
