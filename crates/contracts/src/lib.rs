//! Wire contracts shared between the Stockdesk frontend and the server-side
//! page protocol. Pure data: serde DTOs only, no behavior.

pub mod catalog;
pub mod dashboard;
pub mod sales;
pub mod visit;
