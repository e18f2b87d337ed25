pub mod builder;
pub mod config;
pub mod decoder;
pub mod detection;
pub mod num;
pub mod opcode;
pub mod script;
pub mod sigops;
pub mod solver;

pub use opcode::Opcode;
pub use script::Script;
