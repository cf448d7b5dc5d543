pub mod generator;
pub mod mapping;
pub mod naming;
pub mod overrides;
