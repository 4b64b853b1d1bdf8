//! 照片来源契约

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::DeviceError;

/// 照片资源
///
/// URI 是平台本地的不透明字符串（`file://`、`content://` 等），
/// 这里不做任何格式解释。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoAsset {
    pub uri: String,
}

impl PhotoAsset {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

/// 照片获取结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "asset", rename_all = "snake_case")]
pub enum PhotoOutcome {
    /// 用户选择或拍摄了一张照片
    Selected(PhotoAsset),
    /// 用户取消了选择
    Cancelled,
    /// 相机 / 相册权限被拒
    PermissionDenied,
}

/// 照片来源
///
/// 两个入口对应相册选择和相机拍摄。相机实现还负责把拍到的
/// 照片写入平台媒体库，这属于平台细节，不在契约里体现。
#[async_trait]
pub trait PhotoSource: Send + Sync {
    /// 从相册选择一张照片
    async fn pick_from_library(&self) -> Result<PhotoOutcome, DeviceError>;

    /// 调用相机拍摄一张照片
    async fn capture(&self) -> Result<PhotoOutcome, DeviceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_outcome_should_serialize_with_status_tag() {
        let selected = PhotoOutcome::Selected(PhotoAsset::new("file://a.jpg"));
        let json = serde_json::to_value(&selected).unwrap();
        assert_eq!(json["status"], "selected");
        assert_eq!(json["asset"]["uri"], "file://a.jpg");

        let cancelled = serde_json::to_value(PhotoOutcome::Cancelled).unwrap();
        assert_eq!(cancelled["status"], "cancelled");
    }
}
