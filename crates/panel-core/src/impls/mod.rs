//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **HttpStatusSource**: reqwest によるステータス API クライアント

pub mod http_status;

pub use self::http_status::HttpStatusSource;
