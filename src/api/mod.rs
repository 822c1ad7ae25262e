//! REST API module.
//!
//! Contains all API routes and handlers following the frontend contract.

mod applications;
mod appointments;
mod favorites;
mod pets;
mod quiz;

pub use applications::*;
pub use appointments::*;
pub use favorites::*;
pub use pets::*;
pub use quiz::*;
