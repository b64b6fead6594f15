pub mod data;
pub mod date;
pub mod endpoints;
pub mod filter;
pub mod helpers;
pub mod validate;
