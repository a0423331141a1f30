// Directory Infrastructure Layer

mod in_memory_directory;
mod sample_roster;

pub use in_memory_directory::*;
pub use sample_roster::*;
