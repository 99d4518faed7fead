//! Domain types for the train tracker.
//!
//! Plain immutable values. Identifiers enforce their invariants at
//! construction time, so code that receives them can embed them in URLs and
//! cache keys without further checks.

pub mod carrier;
mod station;
mod voyage;
mod voyage_id;

pub use carrier::{Carrier, CarrierCode};
pub use station::{Delay, Station};
pub use voyage::Voyage;
pub use voyage_id::{InvalidVoyageId, VoyageId};
