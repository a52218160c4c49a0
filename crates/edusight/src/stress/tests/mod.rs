pub(crate) mod common;
mod intervention;
mod prediction;
