//! 命令层
//!
//! 外壳按钮点击的直接入口。每个命令锁住对应流程、调用业务
//! 方法、把领域错误降级为字符串消息。

pub mod capture_cmd;
pub mod library_cmd;
