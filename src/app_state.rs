//! 应用状态
//!
//! 两个流程状态放在各自的异步互斥锁后面：所有命令都是
//! 用户交互触发的短异步操作，锁保证同一流程内的命令串行，
//! 不会出现两个保存操作对同一个存储文档的并发读改写。

use std::sync::Arc;

use tokio::sync::Mutex;

use geomemo_device::{LocationSource, PhotoSource, ReverseGeocoder};
use geomemo_services::{CaptureFlow, LibraryFlow};
use geomemo_storage::MemoryRepository;

/// 应用状态
pub struct AppState {
    /// 采集流程
    pub capture: Mutex<CaptureFlow>,
    /// 图库流程
    pub library: Mutex<LibraryFlow>,
}

impl AppState {
    /// 组装应用状态
    ///
    /// 仓库和三个设备契约都是注入的：平台外壳提供真实现，
    /// 测试提供桩实现。
    pub fn new(
        repository: Arc<dyn MemoryRepository>,
        photos: Arc<dyn PhotoSource>,
        locations: Arc<dyn LocationSource>,
        geocoder: Arc<dyn ReverseGeocoder>,
    ) -> Self {
        Self {
            capture: Mutex::new(CaptureFlow::new(repository.clone(), photos, locations)),
            library: Mutex::new(LibraryFlow::new(repository, geocoder)),
        }
    }
}
