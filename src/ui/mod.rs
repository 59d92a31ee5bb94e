pub mod layout;
pub mod plot;
