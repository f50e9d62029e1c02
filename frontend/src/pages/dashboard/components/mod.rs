pub mod customize;
pub mod module_card;

pub use customize::CustomizePanel;
pub use module_card::ModuleCard;
