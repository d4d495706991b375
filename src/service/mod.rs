pub mod catalog;
pub mod dispatch;
pub mod grid_layout;

pub use dispatch::LayoutEngine;
pub use grid_layout::GridPlanner;
