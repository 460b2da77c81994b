mod map_surface;
mod scheduler;

pub use self::{map_surface::*, scheduler::*};
