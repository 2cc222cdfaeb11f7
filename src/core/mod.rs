pub mod extractor;
pub mod index;
pub mod resolver;

pub use extractor::{extract_dependencies, DependencyRecord};
pub use index::ModuleIndex;
pub use resolver::{ReachabilityResolver, Resolution};
