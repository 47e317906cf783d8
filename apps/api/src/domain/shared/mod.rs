pub mod pagination;
pub mod principal;
