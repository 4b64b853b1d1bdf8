//! 内存仓库
//!
//! 测试和无文件系统嵌入场景用的仓库实现。

use async_trait::async_trait;
use parking_lot::RwLock;

use geomemo_core::errors::StorageError;
use geomemo_core::Memory;

use crate::repository::MemoryRepository;

/// 内存仓库
#[derive(Default)]
pub struct InMemoryRepository {
    entries: RwLock<Vec<Memory>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以给定初始集合创建
    pub fn with_entries(entries: Vec<Memory>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// 当前集合长度（测试断言用）
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl MemoryRepository for InMemoryRepository {
    async fn load(&self) -> Result<Vec<Memory>, StorageError> {
        Ok(self.entries.read().clone())
    }

    async fn replace_all(&self, memories: &[Memory]) -> Result<(), StorageError> {
        *self.entries.write() = memories.to_vec();
        Ok(())
    }
}
