//! Mapping configuration and value model for the transit engine.
//!
//! This crate holds everything the engine consumes but does not own:
//!
//! - **descriptor**: per-property mapping configuration (target names,
//!   literal overrides, value mappings, child descriptors)
//! - **value**: type-erased constructed values and the emptiness capability
//! - **locale**: culture/format context for raw-string conversion
//! - **convert**: locale-aware parsing from raw strings to typed values

pub mod convert;
pub mod descriptor;
pub mod locale;
pub mod value;

pub use convert::{ConvertError, FromRaw};
pub use descriptor::{PropertyDescriptor, ValueMapping};
pub use locale::Locale;
pub use value::{ChildValue, ReportsEmpty};
