//! Record - 緩い型付けの外部レコード
//!
//! runs / approvals / runEvents の要素は上流ごとにフィールド構成が違う。
//! 形を仮定せず、フィールド単位で「あれば読む」アクセスだけを提供する。

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Record は外部から受け取った 1 件分の JSON 値
///
/// # 不変条件
/// - 中身はオブジェクトとは限らない（配列要素は検証しない）
/// - オブジェクト以外へのフィールドアクセスは常に None
/// - 受信後に変更しない
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Value);

impl Record {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// 生のフィールド値
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.as_object().and_then(|map| map.get(field))
    }

    /// 表示用テキストとしてのフィールド値
    ///
    /// - 空でない文字列: そのまま
    /// - 0 以外の数値: JSON 表記
    /// - `true`: "true"
    /// - それ以外（空文字列, 0, false, null, 配列, オブジェクト）: None
    pub fn text(&self, field: &str) -> Option<String> {
        self.get(field).and_then(text_of)
    }

    /// `fields` を順に見て最初にテキストを持つもの
    pub fn first_text(&self, fields: &[&str]) -> Option<String> {
        fields.iter().find_map(|field| self.text(field))
    }

    /// 文字列として入っている payload（空文字列も含む）
    ///
    /// 整形済みテキストとして扱い、再パースはしない。
    pub fn payload(&self) -> Option<&str> {
        self.get("payload").and_then(Value::as_str)
    }
}

/// 値 1 つ分の表示用テキスト（[`Record::text`] と同じ規則）
///
/// 偽値（空文字列, 0, false, null）は「なし」として次の候補に譲る。
pub fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
