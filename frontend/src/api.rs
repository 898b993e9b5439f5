pub mod client;
pub mod utils;

pub use client::HttpAdminApi;
