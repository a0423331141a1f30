// Config Infrastructure Layer
//
// 配置模块的基础设施实现

pub mod json_file_repository;
pub mod memory_repository;

pub use json_file_repository::*;
pub use memory_repository::*;
