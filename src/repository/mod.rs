pub mod catalog_error;
pub mod product_repo;
