pub mod icons;
pub mod links;
pub mod loader;
pub mod notify;
pub mod record;
pub mod views;
pub mod web;
pub mod widget;

pub use loader::RecordStore;
pub use record::PreviewRecord;
pub use widget::{CardState, InterestCard, SubmitAction, Visibility};
