pub mod sqlx_catalog_repository_impl;
