pub mod apply;
pub mod print;
