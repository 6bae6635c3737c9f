//! Settings-related Tauri commands
//! 设置相关的 Tauri 命令

use crate::bootstrap::AppRuntime;
use crate::commands::map_err;
use sc_app::usecases::settings::CompanyDto;
use sc_app::usecases::SettingsSaveOutcome;
use sc_core::account::{AccountUpdate, UserProfile};
use sc_core::company::Company;
use std::sync::Arc;
use tauri::State;
use tracing::{info_span, Instrument};

/// Get the account settings form data (profile lazily created)
/// 获取账户设置表单数据（不存在时惰性创建）
#[tauri::command]
pub async fn get_account(runtime: State<'_, Arc<AppRuntime>>) -> Result<UserProfile, String> {
    let span = info_span!("command.settings.get_account");
    async {
        let uc = runtime.usecases().get_account();
        uc.execute().await.map_err(map_err)
    }
    .instrument(span)
    .await
}

/// Save the account settings form (partial update)
/// 保存账户设置表单（部分更新）
#[tauri::command]
pub async fn update_account(
    runtime: State<'_, Arc<AppRuntime>>,
    update: AccountUpdate,
) -> Result<SettingsSaveOutcome, String> {
    let span = info_span!("command.settings.update_account");
    async {
        let uc = runtime.usecases().update_account();
        uc.execute(update).await.map_err(map_err)
    }
    .instrument(span)
    .await
}

/// Get the company settings form data (company lazily created)
/// 获取公司设置表单数据（不存在时惰性创建）
#[tauri::command]
pub async fn get_company(runtime: State<'_, Arc<AppRuntime>>) -> Result<CompanyDto, String> {
    let span = info_span!("command.settings.get_company");
    async {
        let uc = runtime.usecases().get_company();
        uc.execute().await.map_err(map_err)
    }
    .instrument(span)
    .await
}

/// Save the company settings form
/// 保存公司设置表单
#[tauri::command]
pub async fn update_company(
    runtime: State<'_, Arc<AppRuntime>>,
    company: Company,
) -> Result<SettingsSaveOutcome, String> {
    let span = info_span!("command.settings.update_company");
    async {
        let uc = runtime.usecases().update_company();
        uc.execute(company).await.map_err(map_err)
    }
    .instrument(span)
    .await
}

/// Resize and upload a profile picture, returning its URL
/// 缩放并上传头像，返回其 URL
#[tauri::command]
pub async fn upload_profile_picture(
    runtime: State<'_, Arc<AppRuntime>>,
    file_name: String,
    data: Vec<u8>,
) -> Result<String, String> {
    let span = info_span!("command.settings.upload_profile_picture");
    async {
        let uc = runtime.usecases().upload_profile_picture();
        uc.execute(&file_name, data).await.map_err(map_err)
    }
    .instrument(span)
    .await
}
