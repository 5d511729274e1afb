mod page;
mod sections;
mod widget;

pub use page::{render_brand_style, render_not_found, render_preview_page};
pub use widget::{render_card_body, render_interest_card};
