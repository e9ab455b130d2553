//! panel-core
//!
//! Core building blocks for the status panel.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（RequestId, Record, StatusResponse, timestamp, badge）
//! - **normalize**: 緩い JSON を安全に配列へ変換し、時系列に並べる
//! - **ports**: 抽象化レイヤー（StatusSource）
//! - **impls**: 実装（HttpStatusSource）
//! - **app**: 画面の状態遷移（PanelState, Dashboard）と表示用モデル（DashboardView）
//! - **config**: 環境変数からの設定
//! - **error**: エラー型

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod impls;
pub mod normalize;
pub mod ports;

pub use self::error::PanelError;
