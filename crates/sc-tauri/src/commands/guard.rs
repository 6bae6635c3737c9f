//! Route-guard Tauri command
//! 路由守卫相关的 Tauri 命令

use crate::bootstrap::AppRuntime;
use crate::commands::map_err;
use sc_core::guard::RouteDecision;
use std::sync::Arc;
use tauri::State;
use tracing::{info_span, Instrument};

/// Resolve what to do with a requested path
/// 解析请求路径的处理方式
///
/// The webview calls this before rendering a protected view and follows
/// the returned decision (wait, redirect to login/onboarding, or allow).
#[tauri::command]
pub async fn resolve_route(
    runtime: State<'_, Arc<AppRuntime>>,
    path: String,
) -> Result<RouteDecision, String> {
    let span = info_span!("command.guard.resolve_route");
    async {
        let uc = runtime.usecases().resolve_route();
        uc.execute(&path).await.map_err(map_err)
    }
    .instrument(span)
    .await
}
