// Config Application Layer
//
// 应用层实现 CQRS 命令和查询处理器

pub mod commands;
pub mod queries;
pub mod service;

pub use commands::*;
pub use queries::*;
pub use service::*;
