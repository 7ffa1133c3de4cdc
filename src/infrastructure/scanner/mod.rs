//! File-set scanner implementations

mod glob;

pub use glob::GlobFileSetScanner;
