//! Onboarding-related Tauri commands
//! 入门引导相关的 Tauri 命令

use crate::bootstrap::AppRuntime;
use crate::commands::map_err;
use sc_app::usecases::{OnboardingStateDto, SubmitStepOutcome};
use sc_core::onboarding::StepSubmission;
use std::sync::Arc;
use tauri::State;
use tracing::{info_span, Instrument};

/// Get current onboarding state
/// 获取当前入门引导状态
#[tauri::command]
pub async fn get_onboarding_state(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<OnboardingStateDto, String> {
    let span = info_span!("command.onboarding.get_state");
    async {
        let uc = runtime.usecases().get_onboarding_state();
        uc.execute().await.map_err(map_err)
    }
    .instrument(span)
    .await
}

/// Submit the current step's form payload
/// 提交当前步骤的表单数据
///
/// Returns field errors for the form when validation fails; on the final
/// step a valid submission also sets the completion flag.
#[tauri::command]
pub async fn submit_onboarding_step(
    runtime: State<'_, Arc<AppRuntime>>,
    submission: StepSubmission,
) -> Result<SubmitStepOutcome, String> {
    let span = info_span!("command.onboarding.submit_step");
    async {
        let uc = runtime.usecases().submit_onboarding_step();
        uc.execute(submission).await.map_err(map_err)
    }
    .instrument(span)
    .await
}

/// Navigate back one step
/// 返回上一步
#[tauri::command]
pub async fn go_back_onboarding_step(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<OnboardingStateDto, String> {
    let span = info_span!("command.onboarding.go_back");
    async {
        let uc = runtime.usecases().go_back_onboarding_step();
        uc.execute().await.map_err(map_err)
    }
    .instrument(span)
    .await
}

/// Reset onboarding progress and the completion flag
/// 重置入门引导进度与完成标记
#[tauri::command]
pub async fn reset_onboarding(runtime: State<'_, Arc<AppRuntime>>) -> Result<(), String> {
    let span = info_span!("command.onboarding.reset");
    async {
        let uc = runtime.usecases().reset_onboarding();
        uc.execute().await.map_err(map_err)
    }
    .instrument(span)
    .await
}
