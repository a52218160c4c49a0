pub(crate) mod common;
mod plan;
