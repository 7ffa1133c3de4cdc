//! Property file loading

mod loader;
mod parser;

pub use loader::PropertiesFileLoader;
pub use parser::{decode, parse_properties, ParseError};
