pub mod args;
pub mod clip;
pub mod duration;
pub mod export;
pub mod input;
pub mod parser;

pub use clip::ClipEntry;
pub use parser::parse;
