//! 采集流程
//!
//! 把一张照片、一个用户命名和一次定位汇成一条记忆，
//! 显式保存时追加到持久化集合。界面的可见控件由
//! 无照片 / 有照片 两态门控（`has_photo`），这是整个系统
//! 仅有的状态机。

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info, warn};

use geomemo_core::errors::{StorageError, ValidationError};
use geomemo_core::{Coordinates, Memory};
use geomemo_device::{
    DeviceError, FixOutcome, LocationSource, PhotoAsset, PhotoOutcome, PhotoSource,
};
use geomemo_storage::MemoryRepository;

// ============================================================================
// 错误类型
// ============================================================================

/// 采集流程错误
///
/// 所有分支都只是"提示并中止本次操作"：没有重试，也不致命。
#[derive(Error, Debug)]
pub enum CaptureError {
    /// 名称为空
    #[error("请先给这段记忆起个名字")]
    EmptyName,

    /// 还没有定位
    #[error("未能获取当前位置，请重试")]
    MissingLocation,

    /// 还没有照片
    #[error("请先选择或拍摄一张照片")]
    MissingPhoto,

    /// 设备调用失败
    #[error("设备调用失败: {0}")]
    Device(#[from] DeviceError),

    /// 字段校验失败
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// 存储失败
    #[error("保存记忆失败: {0}")]
    Storage(#[from] StorageError),
}

impl From<CaptureError> for String {
    fn from(err: CaptureError) -> Self {
        err.to_string()
    }
}

impl serde::Serialize for CaptureError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

// ============================================================================
// 采集流程
// ============================================================================

/// 采集流程状态
///
/// 待保存的名称、照片和定位都暂存在内存里，只有显式 `save`
/// 才会写入仓库。照片获取成功后会立刻发起一次定位请求。
pub struct CaptureFlow {
    repository: Arc<dyn MemoryRepository>,
    photos: Arc<dyn PhotoSource>,
    locations: Arc<dyn LocationSource>,
    name: String,
    photo: Option<PhotoAsset>,
    location: Option<Coordinates>,
}

impl CaptureFlow {
    pub fn new(
        repository: Arc<dyn MemoryRepository>,
        photos: Arc<dyn PhotoSource>,
        locations: Arc<dyn LocationSource>,
    ) -> Self {
        Self {
            repository,
            photos,
            locations,
            name: String::new(),
            photo: None,
            location: None,
        }
    }

    // ------------------------------------------------------------------------
    // 状态读取
    // ------------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn photo(&self) -> Option<&PhotoAsset> {
        self.photo.as_ref()
    }

    pub fn location(&self) -> Option<Coordinates> {
        self.location
    }

    /// 两态门控：有照片时界面才显示命名输入、保存和清空控件
    pub fn has_photo(&self) -> bool {
        self.photo.is_some()
    }

    // ------------------------------------------------------------------------
    // 状态修改
    // ------------------------------------------------------------------------

    /// 更新待保存的名称
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// 清空采集状态（名称、照片、定位）
    pub fn reset(&mut self) {
        self.name.clear();
        self.photo = None;
        self.location = None;
        debug!("采集状态已清空");
    }

    // ------------------------------------------------------------------------
    // 照片与定位
    // ------------------------------------------------------------------------

    /// 从相册选择照片
    pub async fn pick_photo(&mut self) -> Result<PhotoOutcome, CaptureError> {
        let outcome = self.photos.pick_from_library().await?;
        self.apply_photo_outcome(&outcome).await;
        Ok(outcome)
    }

    /// 调用相机拍摄照片
    pub async fn take_photo(&mut self) -> Result<PhotoOutcome, CaptureError> {
        let outcome = self.photos.capture().await?;
        self.apply_photo_outcome(&outcome).await;
        Ok(outcome)
    }

    /// 应用照片结果：取消和权限被拒都不触碰已有状态
    async fn apply_photo_outcome(&mut self, outcome: &PhotoOutcome) {
        match outcome {
            PhotoOutcome::Selected(asset) => {
                info!("已获取照片: {}", asset.uri);
                self.photo = Some(asset.clone());
                self.request_fix().await;
            }
            PhotoOutcome::Cancelled => {
                debug!("用户取消了照片选择");
            }
            PhotoOutcome::PermissionDenied => {
                warn!("相机/相册权限被拒");
            }
        }
    }

    /// 请求一次定位；拒绝或失败只记日志，保存前置条件会拦住后续
    async fn request_fix(&mut self) {
        match self.locations.current_fix().await {
            Ok(FixOutcome::Fix(coords)) => {
                info!("已获取定位: ({}, {})", coords.latitude, coords.longitude);
                self.location = Some(coords);
            }
            Ok(FixOutcome::PermissionDenied) => {
                error!("定位权限被拒");
            }
            Err(e) => {
                error!("定位失败: {}", e);
            }
        }
    }

    // ------------------------------------------------------------------------
    // 保存
    // ------------------------------------------------------------------------

    /// 保存当前记忆
    ///
    /// 前置条件按顺序检查：名称非空 → 有定位 → 有照片。
    /// 通过后整体读出集合、追加、整体写回。存储失败时内存
    /// 状态保持不变；成功后也保留采集状态（由用户决定何时清空）。
    pub async fn save(&mut self) -> Result<Memory, CaptureError> {
        if self.name.trim().is_empty() {
            return Err(CaptureError::EmptyName);
        }
        let location = self.location.ok_or(CaptureError::MissingLocation)?;
        let photo = self.photo.as_ref().ok_or(CaptureError::MissingPhoto)?;

        let memory = Memory::new(self.name.trim(), photo.uri.clone(), location);
        memory.validate()?;

        let mut memories = self.repository.load().await?;
        memories.push(memory.clone());
        self.repository.replace_all(&memories).await?;

        info!("记忆保存成功: {}", memory.name);
        Ok(memory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use geomemo_storage::InMemoryRepository;
    use std::io;

    struct StubPhotoSource {
        outcome: PhotoOutcome,
    }

    #[async_trait]
    impl PhotoSource for StubPhotoSource {
        async fn pick_from_library(&self) -> Result<PhotoOutcome, DeviceError> {
            Ok(self.outcome.clone())
        }

        async fn capture(&self) -> Result<PhotoOutcome, DeviceError> {
            Ok(self.outcome.clone())
        }
    }

    struct StubLocationSource {
        outcome: FixOutcome,
    }

    #[async_trait]
    impl LocationSource for StubLocationSource {
        async fn current_fix(&self) -> Result<FixOutcome, DeviceError> {
            Ok(self.outcome.clone())
        }
    }

    /// 写入必定失败的仓库
    struct FailingRepository;

    #[async_trait]
    impl MemoryRepository for FailingRepository {
        async fn load(&self) -> Result<Vec<Memory>, StorageError> {
            Ok(Vec::new())
        }

        async fn replace_all(&self, _memories: &[Memory]) -> Result<(), StorageError> {
            Err(StorageError::Io(io::Error::new(
                io::ErrorKind::Other,
                "磁盘已满",
            )))
        }
    }

    fn flow_with(
        repository: Arc<dyn MemoryRepository>,
        photo: PhotoOutcome,
        fix: FixOutcome,
    ) -> CaptureFlow {
        CaptureFlow::new(
            repository,
            Arc::new(StubPhotoSource { outcome: photo }),
            Arc::new(StubLocationSource { outcome: fix }),
        )
    }

    fn selected(uri: &str) -> PhotoOutcome {
        PhotoOutcome::Selected(PhotoAsset::new(uri))
    }

    fn fix(latitude: f64, longitude: f64) -> FixOutcome {
        FixOutcome::Fix(Coordinates::new(latitude, longitude))
    }

    #[tokio::test]
    async fn pick_photo_should_store_asset_and_request_fix() {
        let repo = Arc::new(InMemoryRepository::new());
        let mut flow = flow_with(repo, selected("file://a.jpg"), fix(10.0, 20.0));

        assert!(!flow.has_photo());
        let outcome = flow.pick_photo().await.unwrap();

        assert_eq!(outcome, selected("file://a.jpg"));
        assert!(flow.has_photo());
        assert_eq!(flow.location(), Some(Coordinates::new(10.0, 20.0)));
    }

    #[tokio::test]
    async fn cancelled_pick_should_leave_prior_state_untouched() {
        let repo = Arc::new(InMemoryRepository::new());
        let mut flow = flow_with(repo.clone(), selected("file://a.jpg"), fix(10.0, 20.0));

        flow.pick_photo().await.unwrap();
        flow.set_name("海边");

        // 换成必定取消的照片来源，再选一次
        flow.photos = Arc::new(StubPhotoSource {
            outcome: PhotoOutcome::Cancelled,
        });
        let outcome = flow.pick_photo().await.unwrap();

        assert_eq!(outcome, PhotoOutcome::Cancelled);
        assert_eq!(flow.name(), "海边");
        assert_eq!(flow.photo().unwrap().uri, "file://a.jpg");
        assert_eq!(flow.location(), Some(Coordinates::new(10.0, 20.0)));
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn denied_location_should_leave_location_empty() {
        let repo = Arc::new(InMemoryRepository::new());
        let mut flow = flow_with(
            repo,
            selected("file://a.jpg"),
            FixOutcome::PermissionDenied,
        );

        flow.take_photo().await.unwrap();
        assert!(flow.has_photo());
        assert_eq!(flow.location(), None);
    }

    #[tokio::test]
    async fn save_should_reject_empty_name_and_keep_store_unchanged() {
        let repo = Arc::new(InMemoryRepository::new());
        let mut flow = flow_with(repo.clone(), selected("file://a.jpg"), fix(1.0, 2.0));

        flow.pick_photo().await.unwrap();
        flow.set_name("   ");

        assert!(matches!(flow.save().await, Err(CaptureError::EmptyName)));
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn save_should_reject_missing_location_and_keep_store_unchanged() {
        let repo = Arc::new(InMemoryRepository::new());
        let mut flow = flow_with(
            repo.clone(),
            selected("file://a.jpg"),
            FixOutcome::PermissionDenied,
        );

        flow.pick_photo().await.unwrap();
        flow.set_name("海边");

        assert!(matches!(
            flow.save().await,
            Err(CaptureError::MissingLocation)
        ));
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn save_should_reject_missing_photo() {
        let repo = Arc::new(InMemoryRepository::new());
        let mut flow = flow_with(repo.clone(), PhotoOutcome::Cancelled, fix(1.0, 2.0));

        flow.set_name("海边");
        // 取消后手动塞一个定位，照片检查仍应拦住
        flow.location = Some(Coordinates::new(1.0, 2.0));

        assert!(matches!(flow.save().await, Err(CaptureError::MissingPhoto)));
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn save_should_append_and_keep_pending_state() {
        let repo = Arc::new(InMemoryRepository::new());
        let mut flow = flow_with(repo.clone(), selected("file://a.jpg"), fix(10.0, 20.0));

        flow.pick_photo().await.unwrap();
        flow.set_name("  Beach  ");

        let saved = flow.save().await.unwrap();
        assert_eq!(saved.name, "Beach");
        assert_eq!(saved.photo_uri, "file://a.jpg");
        assert_eq!(saved.location, Coordinates::new(10.0, 20.0));
        assert_eq!(repo.len(), 1);

        // 保存成功后采集状态保留
        assert!(flow.has_photo());
        assert_eq!(flow.name(), "  Beach  ");

        // 再保存一次是追加，不是覆盖
        flow.save().await.unwrap();
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn save_should_surface_storage_failure_and_keep_state() {
        let mut flow = flow_with(
            Arc::new(FailingRepository),
            selected("file://a.jpg"),
            fix(1.0, 2.0),
        );

        flow.pick_photo().await.unwrap();
        flow.set_name("海边");

        assert!(matches!(flow.save().await, Err(CaptureError::Storage(_))));
        assert!(flow.has_photo());
        assert_eq!(flow.name(), "海边");
    }

    #[tokio::test]
    async fn reset_should_clear_everything() {
        let repo = Arc::new(InMemoryRepository::new());
        let mut flow = flow_with(repo, selected("file://a.jpg"), fix(1.0, 2.0));

        flow.pick_photo().await.unwrap();
        flow.set_name("海边");
        flow.reset();

        assert_eq!(flow.name(), "");
        assert!(!flow.has_photo());
        assert_eq!(flow.location(), None);
    }
}
