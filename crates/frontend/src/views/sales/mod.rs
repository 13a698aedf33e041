pub mod create;
pub mod index;
