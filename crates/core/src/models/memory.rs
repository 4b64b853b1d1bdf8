//! 记忆数据模型
//!
//! 定义统一的记忆条目结构。历史版本的字段布局并不一致
//! （`nome`/`title`、`foto`/`image`、扁平或嵌套的坐标），
//! 这里固定为唯一的规范结构，旧布局由 schema 模块在加载时归一化。

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;

/// 地理坐标
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// 纬度（-90.0 ~ 90.0）
    pub latitude: f64,
    /// 经度（-180.0 ~ 180.0）
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// 坐标是否在有效范围内
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude.abs() <= 90.0
            && self.longitude.abs() <= 180.0
    }
}

/// 记忆条目
///
/// 一条记忆由一张照片、一个用户命名和拍摄时的设备位置组成。
/// 整个集合作为单个文档整体读写，没有逐条更新或删除。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    /// 唯一标识符
    pub id: String,
    /// 用户输入的名称（保存前已去除首尾空白，非空）
    pub name: String,
    /// 平台本地照片 URI（不透明字符串，不做格式校验）
    pub photo_uri: String,
    /// 拍摄时的设备位置
    pub location: Coordinates,
    /// 反向地理编码得到的地址（可选，尽力而为）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// 创建时间（毫秒时间戳）
    pub created_at: i64,
}

impl Memory {
    /// 创建新的记忆条目
    pub fn new(
        name: impl Into<String>,
        photo_uri: impl Into<String>,
        location: Coordinates,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            photo_uri: photo_uri.into(),
            location,
            address: None,
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// 设置地址
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// 校验必填字段
    ///
    /// 每条持久化的记忆都必须有非空名称、照片 URI 和有效坐标。
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.photo_uri.trim().is_empty() {
            return Err(ValidationError::EmptyPhotoUri);
        }
        if !self.location.is_valid() {
            return Err(ValidationError::InvalidCoordinates {
                latitude: self.location.latitude,
                longitude: self.location.longitude,
            });
        }
        Ok(())
    }
}
