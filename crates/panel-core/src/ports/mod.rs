//! Ports - 抽象化レイヤー
//!
//! 画面の状態遷移（app）とネットワーク（impls）の間の継ぎ目。
//! テストではスクリプト化した実装に差し替える。

pub mod status_source;

pub use self::status_source::StatusSource;
