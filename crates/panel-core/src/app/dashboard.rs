//! Dashboard - submit から表示状態までをつなぐ
//!
//! StatusSource の呼び出しと PanelState の遷移を担当する。
//! ロックはネットワーク呼び出しの間は保持しない。

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use super::state::PanelState;
use crate::domain::RequestId;
use crate::ports::StatusSource;

pub struct Dashboard {
    source: Arc<dyn StatusSource>,
    state: Mutex<PanelState>,
}

impl Dashboard {
    pub fn new(source: Arc<dyn StatusSource>) -> Self {
        Self {
            source,
            state: Mutex::new(PanelState::default()),
        }
    }

    /// 現在の状態のスナップショット
    pub async fn state(&self) -> PanelState {
        self.state.lock().await.clone()
    }

    /// 入力を trim して取得し、結果で状態を更新する
    ///
    /// 重なった呼び出しは防がない。最後に確定した結果が残る。
    /// 戻り値はこの呼び出しが確定させた直後の状態。
    pub async fn submit(&self, input: &str) -> PanelState {
        let request_id = RequestId::new(input);
        self.state.lock().await.begin(request_id.clone());
        debug!(%request_id, "submit");

        let result = self.source.fetch_status(&request_id).await;

        let mut state = self.state.lock().await;
        match result {
            Ok(response) => state.succeed(request_id, response),
            Err(e) => state.fail(request_id, e.to_string()),
        }
        debug!(phase = ?state.phase(), "settled");
        state.clone()
    }
}
