//! GeoMemo 业务流程层
//!
//! 两个协作的流程，共享同一个记忆仓库：
//! - 采集流程（CaptureFlow）：照片 + 命名 + 定位 → 追加到集合
//! - 图库流程（LibraryFlow）：进入时整体加载、顺序展示、确认后清空
//!
//! 所有流程都是用户交互触发的短异步操作，单线程协作式执行，
//! 没有操作会与另一个并发运行。

pub mod capture_flow;
pub mod library_flow;

pub use capture_flow::{CaptureError, CaptureFlow};
pub use library_flow::{Confirmation, LibraryFlow};
