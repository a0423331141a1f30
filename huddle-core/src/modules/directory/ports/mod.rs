// Directory Ports Layer

mod directory_port;

pub use directory_port::*;
