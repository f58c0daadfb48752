pub mod document;

pub use document::{DocumentKind, GeneratedDocument};
