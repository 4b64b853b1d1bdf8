//! 持久化文档与版本迁移
//!
//! 记忆集合作为单个 JSON 文档整体读写。规范文档带版本号：
//!
//! ```json
//! { "version": 1, "memories": [ ... ] }
//! ```
//!
//! 历史版本把集合存成裸数组，且字段布局在各版本间不一致：
//! - 名称字段叫 `nome`、`title` 或 `name`
//! - 照片字段叫 `foto`、`image` 或 `photo`，取值为字符串或 `{ "uri": ... }` 对象
//! - 坐标要么平铺在 `location` 里，要么嵌套在 `location.coords` 里
//!
//! 加载时逐条归一化为规范结构；缺少必填字段的旧记录记一条
//! warning 后跳过，绝不让列表渲染崩溃。

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

use crate::errors::StorageError;
use crate::models::memory::{Coordinates, Memory};

/// 当前存储文档版本
pub const SCHEMA_VERSION: u32 = 1;

/// 规范存储文档（JSON 根对象）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredCollection {
    /// 文档版本
    pub version: u32,
    /// 记忆列表（保持保存顺序）
    pub memories: Vec<Memory>,
}

impl StoredCollection {
    pub fn new(memories: Vec<Memory>) -> Self {
        Self {
            version: SCHEMA_VERSION,
            memories,
        }
    }
}

/// 把记忆集合序列化为规范文档
pub fn to_document(memories: &[Memory]) -> Result<String, StorageError> {
    serde_json::to_string_pretty(&StoredCollection::new(memories.to_vec()))
        .map_err(|e| StorageError::Serialize(e.to_string()))
}

/// 解析存储文档，必要时做旧布局迁移
pub fn parse_document(raw: &str) -> Result<Vec<Memory>, StorageError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| StorageError::Parse(e.to_string()))?;

    // 裸数组：旧版（v0）布局，逐条归一化
    if let Value::Array(records) = &value {
        return Ok(migrate_legacy(records));
    }

    if !value.is_object() {
        return Err(StorageError::Parse(
            "存储文档既不是数组也不是对象".to_string(),
        ));
    }

    // 带版本的规范文档
    let version = value
        .get("version")
        .and_then(Value::as_u64)
        .ok_or_else(|| StorageError::Parse("缺少 version 字段".to_string()))? as u32;

    match version {
        SCHEMA_VERSION => {
            let collection: StoredCollection = serde_json::from_value(value)
                .map_err(|e| StorageError::Parse(e.to_string()))?;
            Ok(collection.memories)
        }
        other => Err(StorageError::UnsupportedVersion(other)),
    }
}

/// 归一化旧版裸数组，跳过无法读取的记录
fn migrate_legacy(records: &[Value]) -> Vec<Memory> {
    let mut memories = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        match migrate_record(record) {
            Some(memory) => memories.push(memory),
            None => {
                warn!("跳过无法迁移的旧记录 #{}: {}", index, record);
            }
        }
    }

    memories
}

/// 归一化单条旧记录
fn migrate_record(record: &Value) -> Option<Memory> {
    let name = first_string(record, &["nome", "title", "name"])?;
    if name.trim().is_empty() {
        return None;
    }

    let photo_uri = legacy_photo_uri(record)?;
    let location = legacy_location(record.get("location")?)?;

    let id = record
        .get("id")
        .and_then(Value::as_str)
        .map(ToString::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let created_at = record
        .get("created_at")
        .or_else(|| record.get("timestamp"))
        .and_then(Value::as_i64)
        .unwrap_or_else(|| chrono::Utc::now().timestamp_millis());

    let memory = Memory {
        id,
        name: name.trim().to_string(),
        photo_uri,
        location,
        address: record
            .get("address")
            .and_then(Value::as_str)
            .map(ToString::to_string),
        created_at,
    };

    memory.validate().ok()?;
    Some(memory)
}

/// 按别名顺序取第一个字符串字段
fn first_string(record: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| record.get(*key).and_then(Value::as_str))
        .map(ToString::to_string)
}

/// 照片字段：字符串直接当 URI，对象取其 `uri` 字段
fn legacy_photo_uri(record: &Value) -> Option<String> {
    let photo = record
        .get("foto")
        .or_else(|| record.get("image"))
        .or_else(|| record.get("photo"))?;

    match photo {
        Value::String(uri) => Some(uri.clone()),
        Value::Object(_) => photo
            .get("uri")
            .and_then(Value::as_str)
            .map(ToString::to_string),
        _ => None,
    }
}

/// 坐标字段：平铺或嵌套在 `coords` 下
fn legacy_location(location: &Value) -> Option<Coordinates> {
    let coords = if location.get("coords").is_some() {
        location.get("coords")?
    } else {
        location
    };

    let latitude = coords.get("latitude").and_then(Value::as_f64)?;
    let longitude = coords.get("longitude").and_then(Value::as_f64)?;

    Some(Coordinates::new(latitude, longitude))
}
