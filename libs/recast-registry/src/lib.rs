pub mod bootstrap;
pub mod common;
pub mod converters;
pub mod registry;
pub mod repository;

pub use bootstrap::{
    ALIAS_CALENDAR_DAY_TO_STRING, ALIAS_CALENDAR_TIME_TO_STRING, ALIAS_DATE_DAY_TO_STRING,
    ALIAS_DATE_TIME_TO_STRING, ALIAS_STRING_TO_CALENDAR_DAY, ALIAS_STRING_TO_CALENDAR_TIME,
    ALIAS_STRING_TO_DATE_DAY, ALIAS_STRING_TO_DATE_TIME,
};
pub use registry::ConverterRegistry;
pub use repository::{ConverterRepository, TypeKey};
