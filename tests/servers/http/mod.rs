pub mod environment;
pub mod v1;
