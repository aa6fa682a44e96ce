//! Runtime data types

pub mod facts;
pub mod value;

pub use facts::FactSet;
pub use value::Value;
