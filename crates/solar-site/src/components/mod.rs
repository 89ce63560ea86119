//! Landing page components

mod nav;
mod footer;
mod cards;

pub use nav::SiteNav;
pub use footer::Footer;
pub use cards::*;
