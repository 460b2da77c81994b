mod badge;
mod details;
mod filter;
mod list;
mod map;
pub mod popup;

pub use self::{badge::*, details::*, filter::*, list::*, map::*};
