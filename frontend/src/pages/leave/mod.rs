pub mod components;
pub mod deadline;
pub mod layout;
pub mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::LeavePage;
