//! GeoMemo 核心类型模块
//!
//! 包含 models（记忆数据模型）、schema（持久化文档与版本迁移）、
//! errors（错误类型）等基础功能

pub mod errors;
pub mod models;
pub mod schema;

pub use models::memory::{Coordinates, Memory};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
