//! 采集流程相关命令

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use geomemo_core::{Coordinates, Memory};
use geomemo_device::PhotoOutcome;

use crate::app_state::AppState;

/// 采集状态快照（界面渲染用）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureSnapshot {
    pub name: String,
    pub photo_uri: Option<String>,
    pub location: Option<Coordinates>,
    pub has_photo: bool,
}

/// 从相册选择照片
pub async fn pick_photo(state: &AppState) -> Result<PhotoOutcome, String> {
    debug!("命令: 从相册选择照片");
    let mut capture = state.capture.lock().await;
    let outcome = capture.pick_photo().await?;
    Ok(outcome)
}

/// 调用相机拍摄照片
pub async fn take_photo(state: &AppState) -> Result<PhotoOutcome, String> {
    debug!("命令: 调用相机拍摄");
    let mut capture = state.capture.lock().await;
    let outcome = capture.take_photo().await?;
    Ok(outcome)
}

/// 更新待保存的记忆名称
pub async fn set_memory_name(state: &AppState, name: String) -> Result<(), String> {
    let mut capture = state.capture.lock().await;
    capture.set_name(name);
    Ok(())
}

/// 保存当前记忆
pub async fn save_memory(state: &AppState) -> Result<Memory, String> {
    debug!("命令: 保存记忆");
    let mut capture = state.capture.lock().await;
    let memory = capture.save().await?;
    info!("记忆保存成功: {}", memory.name);
    Ok(memory)
}

/// 清空采集状态
pub async fn reset_capture(state: &AppState) -> Result<(), String> {
    let mut capture = state.capture.lock().await;
    capture.reset();
    Ok(())
}

/// 读取采集状态快照
pub async fn capture_state(state: &AppState) -> Result<CaptureSnapshot, String> {
    let capture = state.capture.lock().await;
    Ok(CaptureSnapshot {
        name: capture.name().to_string(),
        photo_uri: capture.photo().map(|asset| asset.uri.clone()),
        location: capture.location(),
        has_photo: capture.has_photo(),
    })
}
