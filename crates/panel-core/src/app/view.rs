//! DashboardView - 表示用モデル
//!
//! StatusResponse から描画に必要な値だけを取り出す。
//! 描画方法（ANSI, HTML など）は呼び出し側が決める。

use crate::domain::{Record, RequestId, StatusResponse, Tone};

/// Badge は status テキストと色分け
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: Option<String>,
    pub tone: Tone,
}

impl Badge {
    pub fn new(label: Option<&str>) -> Self {
        Self {
            label: label.map(str::to_string),
            tone: Tone::classify(label),
        }
    }

    fn of(record: &Record) -> Self {
        Self::new(record.text("status").as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub request_id: String,
    pub status: Badge,
    pub approval: Badge,
    pub runs: usize,
    pub approvals: usize,
    pub events: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunCard {
    pub title: String,
    pub status: Badge,
    pub tenant_id: Option<String>,
    pub employee_id: Option<String>,
    pub received_at: Option<String>,
    pub source: Option<String>,
}

impl RunCard {
    fn from_record(r: &Record) -> Self {
        Self {
            title: r
                .first_text(&["agent", "RowKey"])
                .unwrap_or_else(|| "run".to_string()),
            status: Badge::of(r),
            tenant_id: r.text("tenantId"),
            employee_id: r.text("employeeId"),
            received_at: r.first_text(&["receivedAt", "Timestamp"]),
            source: r.text("source"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalCard {
    pub title: String,
    pub status: Badge,
    pub id: Option<String>,
    pub approved_by: Option<String>,
    pub approved_at: Option<String>,
    pub event_type: Option<String>,
    pub ts: Option<String>,
}

impl ApprovalCard {
    fn from_record(r: &Record) -> Self {
        Self {
            title: r.text("agent").unwrap_or_else(|| "approval".to_string()),
            status: Badge::of(r),
            id: r.text("RowKey"),
            approved_by: r.text("approvedBy"),
            approved_at: r.text("approvedAt"),
            event_type: r.text("eventType"),
            ts: r.first_text(&["ts", "Timestamp"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    pub title: String,
    pub status: Badge,
    pub approval_id: Option<String>,
    pub ts: Option<String>,
    pub employee_id: Option<String>,
    pub agent: Option<String>,
    /// 文字列 payload のみ。整形済みテキストとしてそのまま出す。
    pub payload: Option<String>,
}

impl EventCard {
    fn from_record(r: &Record) -> Self {
        Self {
            title: r.text("eventType").unwrap_or_else(|| "event".to_string()),
            status: Badge::of(r),
            approval_id: r.text("approvalId"),
            ts: r.first_text(&["ts", "Timestamp"]),
            employee_id: r.text("employeeId"),
            agent: r.text("agent"),
            payload: r.payload().map(str::to_string),
        }
    }
}

/// DashboardView は 1 回の取得結果の表示用モデル
///
/// 空のセクションは空の Vec。空状態メッセージは描画側の責任。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub summary: Summary,
    pub runs: Vec<RunCard>,
    pub approvals: Vec<ApprovalCard>,
    pub events: Vec<EventCard>,
}

impl DashboardView {
    /// `submitted` は文書に requestId がないときの表示用
    pub fn build(submitted: &RequestId, response: &StatusResponse) -> Self {
        let runs: Vec<RunCard> = response.runs().iter().map(RunCard::from_record).collect();
        let approvals: Vec<ApprovalCard> = response
            .approvals()
            .iter()
            .map(ApprovalCard::from_record)
            .collect();
        let events: Vec<EventCard> = response
            .timeline()
            .iter()
            .map(EventCard::from_record)
            .collect();

        let summary = Summary {
            request_id: response
                .request_id()
                .unwrap_or_else(|| submitted.to_string()),
            status: Badge::new(response.status().as_deref()),
            approval: Badge::new(response.approval().as_deref()),
            runs: runs.len(),
            approvals: approvals.len(),
            events: events.len(),
        };

        Self {
            summary,
            runs,
            approvals,
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn approved_document_with_empty_collections() {
        let response = StatusResponse::new(json!({
            "requestId": "demo-121",
            "status": "Approved",
            "runs": [],
            "approvals": "[]",
            "runEvents": "not-json",
        }));

        let view = DashboardView::build(&RequestId::new("demo-121"), &response);
        assert_eq!(view.summary.status.label.as_deref(), Some("Approved"));
        assert_eq!(view.summary.status.tone, Tone::Affirmative);
        assert_eq!(view.summary.approval, Badge::new(None));
        assert_eq!((view.summary.runs, view.summary.approvals, view.summary.events), (0, 0, 0));
        assert!(view.runs.is_empty());
        assert!(view.approvals.is_empty());
        assert!(view.events.is_empty());
    }

    #[test]
    fn request_id_falls_back_to_submitted_value() {
        let response = StatusResponse::new(json!({"status": "pending"}));
        let view = DashboardView::build(&RequestId::new("typed-in"), &response);
        assert_eq!(view.summary.request_id, "typed-in");
        assert_eq!(view.summary.status.tone, Tone::InProgress);
    }

    #[test]
    fn cards_use_fallback_fields() {
        let response = StatusResponse::new(json!({
            "runs": [
                {"RowKey": "run-7", "Timestamp": "2024-03-01T00:00:00Z", "status": "received"},
                {"agent": "hr-bot", "receivedAt": "2024-03-02", "tenantId": "t1", "source": "email"},
                {}
            ],
            "approvals": [
                {"RowKey": "ap-1", "approvedBy": "alice", "Timestamp": "2024-03-03"}
            ],
        }));

        let view = DashboardView::build(&RequestId::new("x"), &response);

        assert_eq!(view.runs[0].title, "run-7");
        assert_eq!(view.runs[0].received_at.as_deref(), Some("2024-03-01T00:00:00Z"));
        assert_eq!(view.runs[0].status.tone, Tone::Informational);
        assert_eq!(view.runs[1].title, "hr-bot");
        assert_eq!(view.runs[1].received_at.as_deref(), Some("2024-03-02"));
        assert_eq!(view.runs[1].tenant_id.as_deref(), Some("t1"));
        assert_eq!(view.runs[2].title, "run");
        assert_eq!(view.runs[2].status, Badge::new(None));

        let approval = &view.approvals[0];
        assert_eq!(approval.title, "approval");
        assert_eq!(approval.id.as_deref(), Some("ap-1"));
        assert_eq!(approval.approved_by.as_deref(), Some("alice"));
        assert_eq!(approval.ts.as_deref(), Some("2024-03-03"));
    }

    #[test]
    fn events_are_in_chronological_order_with_string_payloads() {
        let response = StatusResponse::new(json!({
            "runEvents": [
                {"eventType": "approved", "ts": "2024-03-02", "approvalId": "ap-1"},
                {"eventType": "received", "ts": "2024-03-01", "payload": "{\n  \"a\": 1\n}"},
                {"status": "gap", "Timestamp": "2024-03-03", "payload": {"a": 1}},
            ],
        }));

        let view = DashboardView::build(&RequestId::new("x"), &response);
        let titles: Vec<&str> = view.events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["received", "approved", "event"]);

        assert_eq!(view.events[0].payload.as_deref(), Some("{\n  \"a\": 1\n}"));
        assert_eq!(view.events[1].approval_id.as_deref(), Some("ap-1"));
        assert_eq!(view.events[2].payload, None);
        assert_eq!(view.events[2].status.tone, Tone::Warning);
        assert_eq!(view.events[2].ts.as_deref(), Some("2024-03-03"));
        assert_eq!(view.summary.events, 3);
    }
}
