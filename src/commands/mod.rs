pub mod harvest;
pub mod probe;
