//! 记忆仓库 trait 定义

use async_trait::async_trait;
use geomemo_core::errors::StorageError;
use geomemo_core::Memory;

/// 记忆仓库
///
/// 集合整体读写：没有逐条更新或删除，保存永远是
/// load-修改-replace_all 的整体替换。接口本身不提供事务或锁，
/// 调用方（命令层持锁的流程状态）负责串行化访问——两个并发的
/// 保存操作会在同一个文档上竞争读改写。
#[async_trait]
pub trait MemoryRepository: Send + Sync {
    /// 读取完整集合（存储不存在时返回空集合）
    async fn load(&self) -> Result<Vec<Memory>, StorageError>;

    /// 用给定集合整体替换持久化内容
    async fn replace_all(&self, memories: &[Memory]) -> Result<(), StorageError>;
}
