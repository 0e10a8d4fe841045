//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 외부 저장소와의 경계를 trait으로 정의하고, Supabase 구현을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{SupabaseUserStore, UserStore};
//!
//! let store = SupabaseUserStore::new(&config.supabase)?;
//! let row = store.upsert(&record).await?;
//! ```

pub mod users;
