pub mod resolver;
pub mod tables;

pub use resolver::Resolution;
