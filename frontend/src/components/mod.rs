pub mod form_section;
pub mod handlers;
pub mod header;
pub mod results;
pub mod utils;
