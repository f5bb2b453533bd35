pub mod aggregate;
pub mod discovery;
pub mod resolver;
pub mod sink;
