//! App - アプリケーション層
//!
//! ports を組み合わせて画面の振る舞いを実装する。
//!
//! # 主要コンポーネント
//! - **PanelState**: Idle / Loading / Success / Failure の状態機械
//! - **Dashboard**: submit → StatusSource → 状態更新
//! - **DashboardView**: 描画用のモデル

pub mod dashboard;
pub mod state;
pub mod view;

pub use self::dashboard::Dashboard;
pub use self::state::{PanelState, Phase};
pub use self::view::{ApprovalCard, Badge, DashboardView, EventCard, RunCard, Summary};
