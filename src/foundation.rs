pub mod error;
pub(crate) mod pixel;
