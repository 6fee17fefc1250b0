pub mod catalog_repository;
pub mod postgres;
