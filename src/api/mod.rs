pub mod layout_api;

pub use layout_api::LayoutApi;
