// Directory Domain Layer

pub mod entities;
pub mod value_objects;

pub use entities::{Counterpart, CounterpartProfile};
pub use value_objects::{CounterpartId, Presence};
