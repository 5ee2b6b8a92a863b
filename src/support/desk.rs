//! The support desk: an in-memory ticket store. Vendors submit, admins
//! transition; nothing deletes a ticket.

use chrono::{DateTime, Duration, Utc};
use log::info;
use thiserror::Error;

use crate::logutil::escape_log;
use crate::support::types::{
    Ticket, TicketCategory, TicketPriority, TicketStatus, TicketSubmission,
};
use crate::validation::{require_line, require_text, ValidationError, MAX_TEXT_LEN};

/// Errors surfaced by ticket operations.
#[derive(Debug, Error)]
pub enum SupportError {
    /// A transition targeted a ticket id that does not exist.
    #[error("ticket {id} not found")]
    NotFound { id: u32 },

    /// The submission form was missing a required field.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Owns the ticket list, most recent submission first, with a monotonic id
/// counter.
#[derive(Debug, Clone)]
pub struct SupportDesk {
    tickets: Vec<Ticket>,
    next_id: u32,
}

impl Default for SupportDesk {
    fn default() -> Self {
        Self::new()
    }
}

impl SupportDesk {
    pub fn new() -> Self {
        Self {
            tickets: Vec::new(),
            next_id: 1,
        }
    }

    /// A desk pre-populated with the starter tickets. Timestamps are
    /// deterministic offsets from the `now` provided.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let tickets = vec![
            Ticket {
                id: 2,
                title: "Image upload fails for larger files".to_string(),
                description: "Product images over 2 MB never finish uploading".to_string(),
                category: TicketCategory::Bug,
                status: TicketStatus::Open,
                priority: TicketPriority::High,
                vendor_id: 1,
                vendor_name: "sarah_seller".to_string(),
                created_at: now - Duration::hours(2),
                updated_at: now - Duration::hours(2),
                admin_response: None,
            },
            Ticket {
                id: 1,
                title: "How can I improve my sales?".to_string(),
                description: "Looking for advice on making my listings stand out".to_string(),
                category: TicketCategory::Question,
                status: TicketStatus::InProgress,
                priority: TicketPriority::Medium,
                vendor_id: 2,
                vendor_name: "mike_merchant".to_string(),
                created_at: now - Duration::days(1),
                updated_at: now - Duration::hours(18),
                admin_response: Some(
                    "We are putting together a detailed guide for you!".to_string(),
                ),
            },
        ];
        Self {
            next_id: 3,
            tickets,
        }
    }

    /// File a new ticket. Starts open, stamped with a single submission
    /// time, and goes to the front of the list.
    pub fn submit(
        &mut self,
        submission: TicketSubmission,
        now: DateTime<Utc>,
    ) -> Result<Ticket, SupportError> {
        require_line("title", &submission.title)?;
        require_text("description", &submission.description, MAX_TEXT_LEN)?;
        require_line("vendor_name", &submission.vendor_name)?;

        let ticket = Ticket {
            id: self.next_id,
            title: submission.title,
            description: submission.description,
            category: submission.category,
            status: TicketStatus::Open,
            priority: submission.priority,
            vendor_id: submission.vendor_id,
            vendor_name: submission.vendor_name,
            created_at: now,
            updated_at: now,
            admin_response: None,
        };
        self.next_id += 1;
        info!(
            "ticket {} submitted by vendor {}: {}",
            ticket.id,
            ticket.vendor_id,
            escape_log(&ticket.title)
        );
        self.tickets.insert(0, ticket.clone());
        Ok(ticket)
    }

    /// Admin transition: set the status, optionally replace the response,
    /// and refresh the update time. Submission time is never touched, and a
    /// `None` response leaves any existing response in place.
    pub fn transition(
        &mut self,
        id: u32,
        status: TicketStatus,
        admin_response: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Ticket, SupportError> {
        let ticket = self
            .tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(SupportError::NotFound { id })?;
        info!("ticket {} transition {} -> {}", id, ticket.status, status);
        ticket.status = status;
        if let Some(response) = admin_response {
            ticket.admin_response = Some(response);
        }
        ticket.updated_at = now;
        Ok(ticket.clone())
    }

    /// Number of tickets still open.
    pub fn open_count(&self) -> usize {
        self.tickets
            .iter()
            .filter(|t| t.status == TicketStatus::Open)
            .count()
    }

    /// One vendor's tickets, preserving store order.
    pub fn tickets_for_vendor(&self, vendor_id: u32) -> Vec<&Ticket> {
        self.tickets
            .iter()
            .filter(|t| t.vendor_id == vendor_id)
            .collect()
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn ticket(&self, id: u32) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn submission(title: &str) -> TicketSubmission {
        TicketSubmission {
            title: title.to_string(),
            description: "Something broke".to_string(),
            category: TicketCategory::Bug,
            priority: TicketPriority::Low,
            vendor_id: 7,
            vendor_name: "test_vendor".to_string(),
        }
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn submissions_are_prepended() {
        let mut desk = SupportDesk::new();
        desk.submit(submission("first"), at(9)).unwrap();
        desk.submit(submission("second"), at(10)).unwrap();
        let titles: Vec<&str> = desk.tickets().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["second", "first"]);
    }

    #[test]
    fn empty_title_is_rejected() {
        let mut desk = SupportDesk::new();
        assert!(matches!(
            desk.submit(submission("  "), at(9)),
            Err(SupportError::Validation(ValidationError::EmptyField {
                field: "title"
            }))
        ));
        assert!(desk.tickets().is_empty());
    }

    #[test]
    fn transition_without_response_keeps_the_old_one() {
        let mut desk = SupportDesk::new();
        let ticket = desk.submit(submission("keep"), at(9)).unwrap();
        desk.transition(
            ticket.id,
            TicketStatus::InProgress,
            Some("On it".to_string()),
            at(10),
        )
        .unwrap();
        let after = desk
            .transition(ticket.id, TicketStatus::Closed, None, at(11))
            .unwrap();
        assert_eq!(after.admin_response.as_deref(), Some("On it"));
        assert_eq!(after.created_at, at(9));
        assert_eq!(after.updated_at, at(11));
    }
}
