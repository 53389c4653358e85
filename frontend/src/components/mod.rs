pub mod chat_panel;
pub mod collapsible;
pub mod handlers;
pub mod header;
pub mod lookup_section;
pub mod overview;
pub mod results;
pub mod sidebar;
pub mod utils;
