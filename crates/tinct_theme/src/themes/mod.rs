//! Built-in themes

pub mod radix;
