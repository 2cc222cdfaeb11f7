pub mod cache;
pub mod common;
pub mod java;

pub use cache::ParseCache;
pub use java::JavaSource;
