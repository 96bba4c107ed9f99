// Application layer: wires configuration, named functions and the counted core together.

pub mod input;
pub mod output;
pub mod registry;
pub mod runner;
