//! Terminal rendering of the panel state.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use panel_core::app::{ApprovalCard, Badge, DashboardView, EventCard, PanelState, RunCard};
use panel_core::domain::{RequestId, Tone};
use serde_json::Value;

const MISSING: &str = "-";

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Show string payloads instead of the collapsed marker.
    pub expand_payloads: bool,
    /// Print the raw response document after the sections.
    pub show_raw: bool,
}

pub fn render_state<W: Write>(state: &PanelState, opts: &RenderOptions, out: &mut W) -> io::Result<()> {
    match state {
        PanelState::Idle => Ok(()),
        PanelState::Loading { request_id } => render_loading(request_id, out),
        PanelState::Failure { message, .. } => render_error(message, out),
        PanelState::Success {
            request_id,
            response,
        } => {
            let view = DashboardView::build(request_id, response);
            render_view(&view, opts, out)?;
            if opts.show_raw {
                render_raw(response.raw(), out)?;
            }
            Ok(())
        }
    }
}

pub fn render_loading<W: Write>(request_id: &RequestId, out: &mut W) -> io::Result<()> {
    writeln!(out, "{} {}", "Loading…".dimmed(), request_id)
}

pub fn render_error<W: Write>(message: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "{} {}", "error:".red().bold(), message.red())
}

pub fn render_view<W: Write>(view: &DashboardView, opts: &RenderOptions, out: &mut W) -> io::Result<()> {
    let s = &view.summary;
    writeln!(
        out,
        "requestId: {}  {}  {}  runs: {}  approvals: {}  events: {}",
        s.request_id.bold(),
        badge("status", &s.status),
        badge("approval", &s.approval),
        s.runs.to_string().bold(),
        s.approvals.to_string().bold(),
        s.events.to_string().bold(),
    )?;

    section(out, "Runs")?;
    if view.runs.is_empty() {
        empty(out, "No runs")?;
    }
    for run in &view.runs {
        render_run(run, out)?;
    }

    section(out, "Approvals")?;
    if view.approvals.is_empty() {
        empty(out, "No approvals")?;
    }
    for approval in &view.approvals {
        render_approval(approval, out)?;
    }

    section(out, "Run Events Timeline")?;
    if view.events.is_empty() {
        empty(out, "No run events")?;
    }
    for event in &view.events {
        render_event(event, opts, out)?;
    }
    Ok(())
}

pub fn render_raw<W: Write>(raw: &Value, out: &mut W) -> io::Result<()> {
    section(out, "Raw response")?;
    let pretty = serde_json::to_string_pretty(raw).map_err(io::Error::other)?;
    for line in pretty.lines() {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

fn render_run<W: Write>(run: &RunCard, out: &mut W) -> io::Result<()> {
    writeln!(out, "  {}  {}", run.title.bold(), badge_label(&run.status))?;
    field(out, "tenantId", &run.tenant_id)?;
    field(out, "employeeId", &run.employee_id)?;
    field(out, "receivedAt", &run.received_at)?;
    field(out, "source", &run.source)
}

fn render_approval<W: Write>(approval: &ApprovalCard, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "  {}  {}  id: {}",
        approval.title.bold(),
        badge_label(&approval.status),
        approval.id.as_deref().unwrap_or(MISSING)
    )?;
    field(out, "approvedBy", &approval.approved_by)?;
    field(out, "approvedAt", &approval.approved_at)?;
    field(out, "eventType", &approval.event_type)?;
    field(out, "ts", &approval.ts)
}

fn render_event<W: Write>(event: &EventCard, opts: &RenderOptions, out: &mut W) -> io::Result<()> {
    match &event.approval_id {
        Some(id) => writeln!(
            out,
            "  {}  {}  approvalId: {}",
            event.title.bold(),
            badge_label(&event.status),
            id.bold()
        )?,
        None => writeln!(out, "  {}  {}", event.title.bold(), badge_label(&event.status))?,
    }
    field(out, "ts", &event.ts)?;
    field(out, "employeeId", &event.employee_id)?;
    field(out, "agent", &event.agent)?;

    if let Some(payload) = &event.payload {
        if opts.expand_payloads {
            writeln!(out, "      {}", "▾ payload".dimmed())?;
            for line in payload.lines() {
                writeln!(out, "        {line}")?;
            }
        } else {
            let marker = format!("▸ payload ({} bytes, --payloads to expand)", payload.len());
            writeln!(out, "      {}", marker.dimmed())?;
        }
    }
    Ok(())
}

fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", title.bold().underline())
}

fn empty<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "  {}", message.dimmed())
}

fn field<W: Write>(out: &mut W, name: &str, value: &Option<String>) -> io::Result<()> {
    writeln!(out, "      {name}: {}", value.as_deref().unwrap_or(MISSING))
}

fn badge(prefix: &str, b: &Badge) -> ColoredString {
    let text = format!("[{prefix}: {}]", b.label.as_deref().unwrap_or(MISSING));
    tint(&text, b.tone)
}

fn badge_label(b: &Badge) -> ColoredString {
    let text = format!("[{}]", b.label.as_deref().unwrap_or(MISSING));
    tint(&text, b.tone)
}

fn tint(text: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Affirmative => text.green(),
        Tone::InProgress => text.magenta(),
        Tone::Warning => text.yellow(),
        Tone::Informational => text.blue(),
        Tone::Neutral => text.normal(),
    }
}
