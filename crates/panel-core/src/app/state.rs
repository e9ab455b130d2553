//! PanelState - 画面の一時状態
//!
//! # 状態遷移
//! - Idle / Success / Failure / Loading -> Loading: submit
//! - Loading -> Success: 取得成功
//! - Loading -> Failure: 取得失敗
//!
//! フェンシングはしない。重なった submit は競合し、最後に確定したものが残る。

use crate::domain::{RequestId, StatusResponse};

#[derive(Debug, Clone, Default)]
pub enum PanelState {
    /// まだ何も送っていない
    #[default]
    Idle,

    /// 取得中（submit は無効）
    Loading { request_id: RequestId },

    /// 直近の取得結果
    Success {
        request_id: RequestId,
        response: StatusResponse,
    },

    /// 直近の取得失敗（表示用メッセージ）
    Failure {
        request_id: RequestId,
        message: String,
    },
}

/// ログ・表示用の状態名
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Failure,
}

impl PanelState {
    /// Loading に入る。以前の error と response は捨てる。
    pub fn begin(&mut self, request_id: RequestId) {
        *self = PanelState::Loading { request_id };
    }

    pub fn succeed(&mut self, request_id: RequestId, response: StatusResponse) {
        *self = PanelState::Success {
            request_id,
            response,
        };
    }

    pub fn fail(&mut self, request_id: RequestId, message: impl Into<String>) {
        *self = PanelState::Failure {
            request_id,
            message: message.into(),
        };
    }

    pub fn phase(&self) -> Phase {
        match self {
            PanelState::Idle => Phase::Idle,
            PanelState::Loading { .. } => Phase::Loading,
            PanelState::Success { .. } => Phase::Success,
            PanelState::Failure { .. } => Phase::Failure,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase() == Phase::Loading
    }

    /// submit ボタンが押せるか
    pub fn can_submit(&self) -> bool {
        !self.is_loading()
    }

    pub fn response(&self) -> Option<&StatusResponse> {
        match self {
            PanelState::Success { response, .. } => Some(response),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PanelState::Failure { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        match self {
            PanelState::Idle => None,
            PanelState::Loading { request_id }
            | PanelState::Success { request_id, .. }
            | PanelState::Failure { request_id, .. } => Some(request_id),
        }
    }
}
