//! JSON 文件仓库
//!
//! 整个集合存在应用目录下的单个 JSON 文档里
//! （默认 `~/.geomemo/memories.json`）。写入先落到同目录的
//! 临时文件再原子改名，写失败不会截断已有数据。

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info};

use geomemo_core::errors::StorageError;
use geomemo_core::{schema, Memory};

use crate::repository::MemoryRepository;

/// 默认存储文件名
const STORE_FILE: &str = "memories.json";

/// JSON 文件仓库
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// 使用指定文档路径创建仓库
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 使用默认应用目录（`~/.geomemo/memories.json`）创建仓库
    pub fn in_app_dir() -> Self {
        Self::new(Self::default_path())
    }

    /// 默认文档路径
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".geomemo")
            .join(STORE_FILE)
    }

    /// 当前文档路径
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl MemoryRepository for JsonFileRepository {
    async fn load(&self) -> Result<Vec<Memory>, StorageError> {
        if !self.path.exists() {
            debug!("存储文档不存在，返回空集合: {}", self.path.display());
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path)?;
        let memories = schema::parse_document(&raw)?;
        debug!("加载了 {} 条记忆", memories.len());
        Ok(memories)
    }

    async fn replace_all(&self, memories: &[Memory]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let document = schema::to_document(memories)?;

        // 先写临时文件，成功后再原子替换
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, document)?;
        fs::rename(&tmp_path, &self.path)?;

        info!("已写入 {} 条记忆: {}", memories.len(), self.path.display());
        Ok(())
    }
}
