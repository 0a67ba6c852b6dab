#![warn(missing_docs)]

pub mod fmt;
pub mod panic;
