//! GeoMemo 设备能力契约
//!
//! 照片来源、定位来源和反向地理编码都是被消费的外部契约：
//! 真正的平台实现（相机、相册、GPS、权限弹窗）在外壳层，
//! 这里只定义可注入的 trait 和带标签的结果类型——
//! 拿到值 / 用户取消 / 权限被拒分别是显式的分支，
//! 而不是隐式控制流。

pub mod geocoder;
pub mod location;
pub mod photo;

pub use geocoder::{GeocodeError, HttpGeocoder, ReverseGeocoder};
pub use location::{FixOutcome, LocationSource};
pub use photo::{PhotoAsset, PhotoOutcome, PhotoSource};

use thiserror::Error;

/// 设备调用错误
///
/// 权限被拒和用户取消不算错误（它们是结果枚举里的显式分支），
/// 这里只覆盖平台调用本身的失败。
#[derive(Error, Debug, Clone)]
pub enum DeviceError {
    /// 设备能力不可用（例如没有相机）
    #[error("设备能力不可用: {0}")]
    Unavailable(String),

    /// 平台调用失败
    #[error("平台调用失败: {0}")]
    Platform(String),
}

impl From<DeviceError> for String {
    fn from(err: DeviceError) -> Self {
        err.to_string()
    }
}

impl serde::Serialize for DeviceError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
