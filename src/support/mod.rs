//! Support-ticket desk: vendor submissions, admin transitions, and the
//! queries the support pages read from.

pub mod desk;
pub mod types;

pub use desk::{SupportDesk, SupportError};
pub use types::{Ticket, TicketCategory, TicketPriority, TicketStatus, TicketSubmission};
