//! Config - 環境変数からの設定
//!
//! 設定値はステータス API のエンドポイント URL ひとつだけ。
//! 未設定は起動時ではなく呼び出し時のエラー（`PanelError::Configuration`）になる。

/// エンドポイント URL を読む環境変数
pub const ENDPOINT_VAR: &str = "STATUS_API_URL";

/// 旧フロントエンドの `.env` との互換用
pub const LEGACY_ENDPOINT_VAR: &str = "VITE_STATUS_API_URL";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelConfig {
    pub endpoint: Option<String>,
}

impl PanelConfig {
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            endpoint: endpoint.and_then(non_blank),
        }
    }

    /// プロセス環境から読み込む
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意の lookup 関数から読み込む（テストでは環境変数を触らない）
    ///
    /// `STATUS_API_URL` が優先、空なら `VITE_STATUS_API_URL` を見る。
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup(ENDPOINT_VAR)
            .and_then(non_blank)
            .or_else(|| lookup(LEGACY_ENDPOINT_VAR).and_then(non_blank));
        Self { endpoint }
    }

    /// `endpoint` が Some なら上書きする（CLI フラグ用）
    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint.and_then(non_blank) {
            self.endpoint = Some(endpoint);
        }
        self
    }
}

fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
