//! 定位来源契约

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use geomemo_core::Coordinates;

use crate::DeviceError;

/// 定位结果
///
/// 一次性定位请求：要么拿到尽力而为的坐标，要么权限被拒。
/// 请求一旦发出就不可中途取消。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "coords", rename_all = "snake_case")]
pub enum FixOutcome {
    /// 获得坐标
    Fix(Coordinates),
    /// 定位权限被拒
    PermissionDenied,
}

/// 定位来源
#[async_trait]
pub trait LocationSource: Send + Sync {
    /// 请求一次当前定位
    async fn current_fix(&self) -> Result<FixOutcome, DeviceError>;
}
