// Chat Domain - Entities
// 实体通过唯一标识符来识别

mod attachment;
mod draft;
mod message;

pub use attachment::*;
pub use draft::*;
pub use message::*;
