//! GeoMemo - 地点记忆应用
//!
//! 拍一张照片、起个名字、带上当前定位，存成一条"记忆"，
//! 之后在图库里浏览或一键清空。没有服务端，没有账号，
//! 所有数据都在设备本地。
//!
//! ## Workspace 结构
//!
//! - geomemo-core：数据模型、持久化文档与版本迁移、错误类型
//! - geomemo-storage：仓库接口与 JSON 文件 / 内存实现
//! - geomemo-device：照片、定位、反向地理编码的设备契约
//! - geomemo-services：采集流程与图库流程
//! - 主 crate：应用状态与命令层（外壳按钮点击的直接入口）
//!
//! 外壳层（界面、地图控件、权限弹窗）不在本仓库内：命令层
//! 保持框架无关，返回 `Result<T, String>`，由外壳负责展示。

pub mod app_state;
pub mod commands;
pub mod logger;

pub use app_state::AppState;
