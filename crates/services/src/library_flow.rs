//! 图库流程
//!
//! 进入图库时整体加载集合、按保存顺序展示，唯一的破坏性
//! 操作是确认后整体清空。读取失败只记日志并退回空列表，
//! 不向用户报错。

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use geomemo_core::errors::StorageError;
use geomemo_core::Memory;
use geomemo_device::ReverseGeocoder;
use geomemo_storage::MemoryRepository;

/// 未匹配到地址时的占位文案
const ADDRESS_NOT_FOUND: &str = "未找到对应地址";
/// 地址查询失败时的占位文案
const ADDRESS_LOOKUP_FAILED: &str = "地址查询失败";

/// 破坏性操作的确认结果
///
/// 确认对话框本身属于外壳层，这里只消费它的结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

/// 图库流程状态
pub struct LibraryFlow {
    repository: Arc<dyn MemoryRepository>,
    geocoder: Arc<dyn ReverseGeocoder>,
    entries: Vec<Memory>,
}

impl LibraryFlow {
    pub fn new(repository: Arc<dyn MemoryRepository>, geocoder: Arc<dyn ReverseGeocoder>) -> Self {
        Self {
            repository,
            geocoder,
            entries: Vec::new(),
        }
    }

    /// 重新加载集合
    ///
    /// 读取失败退回空列表：只记日志，没有用户可见的错误。
    pub async fn refresh(&mut self) {
        match self.repository.load().await {
            Ok(memories) => {
                debug!("图库加载了 {} 条记忆", memories.len());
                self.entries = memories;
            }
            Err(e) => {
                error!("加载记忆列表失败: {}", e);
                self.entries.clear();
            }
        }
    }

    /// 按保存顺序返回所有条目
    pub fn entries(&self) -> &[Memory] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 清空控件只在列表非空时展示
    pub fn can_clear(&self) -> bool {
        !self.entries.is_empty()
    }

    /// 确认后清空整个集合
    ///
    /// 返回是否真的清空了。取消什么都不做；写入失败时
    /// 内存列表保持原样。
    pub async fn clear_all(&mut self, confirmation: Confirmation) -> Result<bool, StorageError> {
        match confirmation {
            Confirmation::Cancelled => {
                debug!("用户取消了清空操作");
                Ok(false)
            }
            Confirmation::Confirmed => {
                self.repository.replace_all(&[]).await?;
                self.entries.clear();
                info!("已清空全部记忆");
                Ok(true)
            }
        }
    }

    /// 反向解析某个条目的地址
    ///
    /// 永远返回可展示的字符串：查不到和查失败都降级为占位文案。
    pub async fn resolve_address(&self, index: usize) -> String {
        let Some(memory) = self.entries.get(index) else {
            warn!("地址解析越界: index={}", index);
            return ADDRESS_NOT_FOUND.to_string();
        };

        match self.geocoder.reverse(&memory.location).await {
            Ok(Some(address)) => address,
            Ok(None) => ADDRESS_NOT_FOUND.to_string(),
            Err(e) => {
                error!("反向地理编码失败: {}", e);
                ADDRESS_LOOKUP_FAILED.to_string()
            }
        }
    }
}
