pub mod aggregate;
pub mod attributes;
