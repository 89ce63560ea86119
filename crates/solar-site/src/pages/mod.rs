//! Landing page sections

mod home;
mod quote;

pub use home::HomePage;
pub use quote::QuoteSection;
