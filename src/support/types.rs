use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What kind of help the vendor is asking for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TicketCategory {
    Bug,
    Question,
    Improvement,
}

/// Where a ticket stands. Transitions are free: any status can be set from
/// any other (a closed ticket may be reopened).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Closed,
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in-progress",
            TicketStatus::Closed => "closed",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
}

/// A support request from a vendor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ticket {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: TicketCategory,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub vendor_id: u32,
    pub vendor_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_response: Option<String>,
}

/// Fixed-shape input for the ticket form. Identifier, status and timestamps
/// are assigned by the desk on submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketSubmission {
    pub title: String,
    pub description: String,
    pub category: TicketCategory,
    pub priority: TicketPriority,
    pub vendor_id: u32,
    pub vendor_name: String,
}
