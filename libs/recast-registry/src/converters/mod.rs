//! Builtin converter library.
//!
//! Every converter is a stateless unit struct implementing
//! [`recast_api::Converter`]. The registry indexes them; failures are
//! [`recast_api::ConvertError`], never panics.

pub mod bytes;
pub mod date;
pub mod enums;
pub mod numeric;
pub mod sql;
pub mod text;
