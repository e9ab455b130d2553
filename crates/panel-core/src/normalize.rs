//! Normalize - 緩い JSON から表示用のコレクションを作る
//!
//! # 回復境界
//! ここでの失敗（JSON パース失敗、形の不一致）は全て空配列に変換する。
//! `PanelError` には決して到達しない。

use serde_json::Value;

use crate::domain::record::Record;
use crate::domain::timestamp::epoch_millis;

/// 任意の値を Record の列に変換する
///
/// - None / null / 偽値 → 空
/// - 配列 → 要素をそのまま（要素は検証しない）
/// - 文字列 → JSON としてパースし、配列ならその要素、それ以外は空
/// - その他（数値, オブジェクト, 真偽値）→ 空
pub fn coerce_records(value: Option<&Value>) -> Vec<Record> {
    match value {
        Some(Value::Array(items)) => items.iter().cloned().map(Record::new).collect(),
        Some(Value::String(text)) if !text.is_empty() => parse_array(text),
        _ => Vec::new(),
    }
}

fn parse_array(text: &str) -> Vec<Record> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => items.into_iter().map(Record::new).collect(),
        Ok(other) => {
            tracing::debug!(kind = json_kind(&other), "string-encoded collection is not an array");
            Vec::new()
        }
        Err(e) => {
            tracing::debug!(error = %e, "string-encoded collection is not valid JSON");
            Vec::new()
        }
    }
}

/// 時刻昇順に並べたコピーを返す
///
/// 入力は変更しない。同時刻（時刻なしを含む）は入力順を保つ。
/// 時刻のパースは 1 件につき 1 回。
pub fn chronological(records: &[Record]) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by_cached_key(epoch_millis);
    sorted
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
