mod cli;
mod interactive;
mod render;

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use panel_core::app::Dashboard;
use panel_core::config::PanelConfig;
use panel_core::impls::HttpStatusSource;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::render::RenderOptions;

fn init_tracing() {
    // stdout は描画専用。ログは stderr へ
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // (A) .env があれば読む（なくてもよい）
    let dotenv = dotenvy::dotenv();
    init_tracing();
    if let Err(e) = &dotenv
        && !e.not_found()
    {
        tracing::warn!(error = %e, "failed to read .env");
    }

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    // (B) 設定: 環境変数 → --endpoint で上書き
    let config = PanelConfig::from_env().with_endpoint(cli.endpoint.clone());
    tracing::debug!(endpoint = ?config.endpoint, "configuration loaded");

    let source = HttpStatusSource::new(&config)?;
    let dashboard = Dashboard::new(Arc::new(source));
    let opts = RenderOptions {
        expand_payloads: cli.payloads,
        show_raw: cli.raw,
    };

    // (C) 対話モード: 1 行 = 1 submit
    if cli.interactive {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = io::stdout();
        interactive::run(&dashboard, &cli.request_id, &opts, stdin, &mut stdout).await?;
        return Ok(ExitCode::SUCCESS);
    }

    // (D) 単発: 失敗時は非ゼロ終了
    let state = dashboard.submit(&cli.request_id).await;
    let mut stdout = io::stdout().lock();
    render::render_state(&state, &opts, &mut stdout)?;
    stdout.flush()?;

    Ok(if state.error().is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
