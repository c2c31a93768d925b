//! The query contract presentation layers consume.

pub mod view;

pub use view::GameModelView;
