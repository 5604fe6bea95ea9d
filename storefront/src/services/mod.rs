// storefront/src/services/mod.rs

pub mod http_api;

pub use http_api::HttpStorefrontApi;
