//! StatusSource port - ステータス取得の抽象化

use async_trait::async_trait;

use crate::domain::{RequestId, StatusResponse};
use crate::error::PanelError;

/// StatusSource は request id からステータス文書を取得する
///
/// # 契約
/// - 1 回の呼び出しにつき外部呼び出しは高々 1 回
/// - リトライもキャッシュもしない
/// - 失敗は `PanelError` に統一する
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch_status(&self, request_id: &RequestId) -> Result<StatusResponse, PanelError>;
}
