//! Page composition: fetch, derive, render.

mod category;
mod home;
mod shell;

pub use category::*;
pub use home::*;
pub use shell::*;
