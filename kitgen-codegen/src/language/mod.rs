//! Language-specific abstractions.
//!
//! - [`NamingConvention`] - Language-specific naming and identifier rules

mod naming;

pub use naming::NamingConvention;
