pub mod converter;
pub mod error;
pub mod value;

pub use converter::Converter;
pub use error::ConvertError;
pub use value::{Value, ValueType};
