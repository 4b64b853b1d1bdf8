//! 核心错误类型
//!
//! - ValidationError（记忆字段校验错误）
//! - StorageError（持久化读写错误）
//!
//! ## 设计原则
//! - 使用 thiserror 派生 Error trait
//! - 支持 From 转换以便错误传播
//! - 实现 Serialize 以便命令层直接返回

use thiserror::Error;

// ============================================================================
// 校验错误
// ============================================================================

/// 记忆字段校验错误
///
/// 每条持久化的记忆都必须满足：名称非空、照片 URI 非空、坐标有效。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// 名称为空
    #[error("记忆名称不能为空")]
    EmptyName,

    /// 照片 URI 为空
    #[error("照片地址不能为空")]
    EmptyPhotoUri,

    /// 坐标超出有效范围
    #[error("坐标超出有效范围: ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
}

impl From<ValidationError> for String {
    fn from(err: ValidationError) -> Self {
        err.to_string()
    }
}

impl serde::Serialize for ValidationError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

// ============================================================================
// 存储错误
// ============================================================================

/// 持久化读写错误
///
/// 涵盖记忆集合整体读写过程中可能出现的所有错误情况。
#[derive(Error, Debug)]
pub enum StorageError {
    /// 文件 IO 错误
    #[error("文件操作失败: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 解析失败
    #[error("JSON 解析失败: {0}")]
    Parse(String),

    /// JSON 序列化失败
    #[error("JSON 序列化失败: {0}")]
    Serialize(String),

    /// 存储文档版本高于当前支持的版本
    #[error("不支持的存储版本: {0}")]
    UnsupportedVersion(u32),
}

impl From<StorageError> for String {
    fn from(err: StorageError) -> Self {
        err.to_string()
    }
}

impl serde::Serialize for StorageError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ValidationError::EmptyName.to_string(), "记忆名称不能为空");
        assert_eq!(
            StorageError::UnsupportedVersion(7).to_string(),
            "不支持的存储版本: 7"
        );
    }

    #[test]
    fn test_error_into_string() {
        let message: String = ValidationError::EmptyPhotoUri.into();
        assert_eq!(message, "照片地址不能为空");
    }
}
