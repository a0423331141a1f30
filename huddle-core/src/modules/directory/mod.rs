// Directory Module - 联系人花名册
//
// 外部协作方的最小化实现：
// - domain: 联系人实体与值对象
// - ports: 花名册只读端口
// - infrastructure: 内存花名册与示例数据

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::{Counterpart, CounterpartId, CounterpartProfile, Presence};
pub use infrastructure::InMemoryDirectory;
pub use ports::{CounterpartDirectory, DirectoryError};
