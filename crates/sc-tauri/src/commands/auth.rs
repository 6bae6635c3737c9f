//! Auth-related Tauri commands
//! 认证相关的 Tauri 命令

use crate::bootstrap::AppRuntime;
use crate::commands::map_err;
use sc_app::usecases::auth::SignInDto;
use sc_core::auth::{AuthStatus, ProviderCredential};
use std::sync::Arc;
use tauri::State;
use tracing::{info_span, Instrument};

/// Complete a Google sign-in with the credential from the webview popup
/// 使用 Webview 弹窗返回的凭证完成 Google 登录
///
/// `from` is the path the user originally requested before being sent to
/// login; it wins as the post-login destination.
#[tauri::command]
pub async fn sign_in_with_google(
    runtime: State<'_, Arc<AppRuntime>>,
    credential: ProviderCredential,
    from: Option<String>,
) -> Result<SignInDto, String> {
    let span = info_span!("command.auth.sign_in");
    async {
        let uc = runtime.usecases().sign_in();
        uc.execute(credential, from).await.map_err(map_err)
    }
    .instrument(span)
    .await
}

/// Sign out and clear all local client state
/// 退出登录并清除所有本地状态
#[tauri::command]
pub async fn sign_out(runtime: State<'_, Arc<AppRuntime>>) -> Result<(), String> {
    let span = info_span!("command.auth.sign_out");
    async {
        let uc = runtime.usecases().sign_out();
        uc.execute().await.map_err(map_err)
    }
    .instrument(span)
    .await
}

/// Restore the persisted auth session (refreshing expired tokens)
/// 恢复持久化的登录会话（过期时刷新令牌）
#[tauri::command]
pub async fn get_auth_session(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<AuthStatus, String> {
    let span = info_span!("command.auth.get_session");
    async {
        let uc = runtime.usecases().get_auth_session();
        uc.execute().await.map_err(map_err)
    }
    .instrument(span)
    .await
}
