pub mod pagination;
pub mod parse;
