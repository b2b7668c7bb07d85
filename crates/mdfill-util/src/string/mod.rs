pub mod escape;
pub mod strings;
