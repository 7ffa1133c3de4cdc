//! Generate Module
//!
//! ## Structure
//!
//! - `options` - `GenerateOptions`
//! - `result` - `GenerateOutcome`
//! - `use_case` - `GenerateUseCase`
//!
//! ## Usage
//!
//! ```ignore
//! use propconst::application::generate::{GenerateOptions, GenerateUseCase};
//!
//! let use_case = GenerateUseCase::new(fs, scanner, loader, renderers);
//! let outcome = use_case.execute(&options)?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::GenerateOptions;
pub use result::GenerateOutcome;
pub use use_case::GenerateUseCase;
