//! Domain models
//!
//! Row records deserialize from executor rows; input records are coerced and
//! validated at the boundary, before any statement is built.

pub mod filter;
pub mod money;
pub mod property;
pub mod reservation;
pub mod user;
pub mod validation;

pub use filter::{FilterOptions, RawFilter};
pub use money::{checked_minor_units, to_minor_units};
pub use property::{NewProperty, Property, PropertyListing};
pub use reservation::ReservationListing;
pub use user::{NewUser, User};
pub use validation::ValidationError;
