//! # roofmap-core
//!
//! Filter and selection logic of the roof installation map.
//!
//! Everything in here is free of any UI toolkit: imperative map commands
//! are sent through the [`gateways::MapSurface`] and
//! [`gateways::Scheduler`] traits that the web app implements.

pub mod controller;
mod error;
pub mod filter;
pub mod focus;
pub mod gateways;
pub mod settings;
pub mod state;
pub mod store;
pub mod view;

#[cfg(test)]
pub mod tests;

pub use self::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use super::{
        controller::*, filter::*, focus::*, gateways::*, settings::*, state::*, store::*,
        view::*, Error, Result,
    };
    pub use roofmap_entities::{
        anchor::*, category::*, geo::*, id::*, links::*, record::*,
    };
}
