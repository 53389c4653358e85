//! Types and state machines shared by the tracking dashboard frontend and its host.
//!
//! Everything here is free of browser APIs so the controllers can be driven
//! natively in tests through a fake [`gateway::Gateway`].

pub mod chat;
pub mod display;
pub mod error;
pub mod gateway;
pub mod lookup;
pub mod model;
pub mod overview;
pub mod routes;

pub use chat::ChatSession;
pub use error::{GatewayError, ValidationError};
pub use gateway::Gateway;
pub use lookup::{LookupController, PredictionTicket};
pub use model::*;
pub use overview::OverviewPanels;
