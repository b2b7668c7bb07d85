pub mod parse;
pub mod string;
