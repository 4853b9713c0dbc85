pub mod fs;
pub mod path;

pub use path::PathResolver;
