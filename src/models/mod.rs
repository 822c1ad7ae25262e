//! Data models for the PawHaven adoption portal.
//!
//! These models match the frontend JSON contract exactly for seamless interoperability.

mod application;
mod appointment;
mod favorite;
mod pet;
mod quiz;
mod user;

pub use application::*;
pub use appointment::*;
pub use favorite::*;
pub use pet::*;
pub use quiz::*;
pub use user::*;
