//! 图库流程相关命令

use tracing::{debug, info};

use geomemo_core::Memory;
use geomemo_services::Confirmation;

use crate::app_state::AppState;

/// 加载全部记忆（进入图库时调用）
pub async fn list_memories(state: &AppState) -> Result<Vec<Memory>, String> {
    debug!("命令: 加载记忆列表");
    let mut library = state.library.lock().await;
    library.refresh().await;
    info!("图库当前有 {} 条记忆", library.len());
    Ok(library.entries().to_vec())
}

/// 清空全部记忆
///
/// `confirmed` 是外壳确认对话框的结果；false 时什么都不做。
/// 返回是否真的清空了。
pub async fn clear_memories(state: &AppState, confirmed: bool) -> Result<bool, String> {
    debug!("命令: 清空全部记忆 (confirmed={})", confirmed);
    let confirmation = if confirmed {
        Confirmation::Confirmed
    } else {
        Confirmation::Cancelled
    };

    let mut library = state.library.lock().await;
    let cleared = library.clear_all(confirmation).await?;
    Ok(cleared)
}

/// 图库是否应该展示清空控件
pub async fn can_clear_memories(state: &AppState) -> Result<bool, String> {
    let library = state.library.lock().await;
    Ok(library.can_clear())
}

/// 解析某条记忆的地址（失败降级为占位文案，永不报错）
pub async fn resolve_memory_address(state: &AppState, index: usize) -> Result<String, String> {
    let library = state.library.lock().await;
    Ok(library.resolve_address(index).await)
}
