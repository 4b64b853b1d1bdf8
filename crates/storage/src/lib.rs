//! GeoMemo 持久化模块
//!
//! 把"单个键值槽里的一个序列化数组"收敛成显式的仓库接口，
//! 存储作为可注入依赖，而不是各处隐式读写同一个全局键：
//! - `MemoryRepository` trait（load / replace_all）
//! - `JsonFileRepository`：应用目录下的单个 JSON 文档
//! - `InMemoryRepository`：测试与无文件系统嵌入场景

pub mod in_memory;
pub mod json_file;
pub mod repository;

pub use in_memory::InMemoryRepository;
pub use json_file::JsonFileRepository;
pub use repository::MemoryRepository;
