//! Prompt loop: each line is a submit.
//!
//! An empty line resubmits the previous id. `quit`, `exit`, or EOF leaves.
//! Input is not read while a fetch is in flight.

use std::io::Write;

use anyhow::Result;
use panel_core::app::Dashboard;
use panel_core::domain::RequestId;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::render::{self, RenderOptions};

pub async fn run<R, W>(
    dashboard: &Dashboard,
    initial: &str,
    opts: &RenderOptions,
    input: R,
    out: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut last = initial.trim().to_string();
    let mut lines = input.lines();

    loop {
        write!(out, "requestId [{last}]: ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };
        let line = line.trim();
        if matches!(line, "quit" | "exit") {
            break;
        }
        if !line.is_empty() {
            last = line.to_string();
        }

        render::render_loading(&RequestId::new(&last), out)?;
        let state = dashboard.submit(&last).await;
        render::render_state(&state, opts, out)?;
        writeln!(out)?;
    }
    Ok(())
}
