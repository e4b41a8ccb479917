//! View models for the tracking and manager screens
//!
//! Everything here is derived from claims on demand. Status colours live in
//! this layer only; the domain carries the bare [`ClaimStatus`].

use chrono::NaiveDate;
use std::fmt;

use core_kernel::{ClaimId, Money};
use domain_claims::{Claim, ClaimStatus, DocumentName};

/// Colour swatch for a status badge
pub fn status_color(status: ClaimStatus) -> &'static str {
    match status {
        ClaimStatus::Pending => "#f39c12",
        ClaimStatus::Approved => "#27ae60",
        ClaimStatus::Rejected => "#e74c3c",
    }
}

/// Short description of the attachment for the manager's card
pub fn document_info(document: &DocumentName) -> String {
    match document.file_name() {
        Some(name) => format!("📎 {name}"),
        None => "No documents".to_string(),
    }
}

/// Formats an amount as dollars with two decimals, sign first (`-$50.00`)
pub fn format_amount(amount: Money) -> String {
    let rounded = amount.round_for_display();
    let magnitude = Money::new(rounded.amount().abs());
    if rounded.amount().is_sign_negative() && !rounded.is_zero() {
        format!("-${magnitude}")
    } else {
        format!("${magnitude}")
    }
}

/// Formats a date as e.g. `Oct 14, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Message shown after a manager decision
pub fn decision_message(claim: &Claim) -> String {
    let verb = match claim.status() {
        ClaimStatus::Approved => "approved",
        ClaimStatus::Rejected => "rejected",
        ClaimStatus::Pending => "left pending",
    };
    format!("Claim from {} has been {}.", claim.lecturer_name(), verb)
}

/// One row of the claim tracking list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingRow {
    pub id: ClaimId,
    pub lecturer_name: String,
    pub date: String,
    pub hours: String,
    pub hourly_rate: String,
    pub total_amount: String,
    pub status: ClaimStatus,
    pub status_color: &'static str,
    pub notes: String,
    pub documents: String,
}

impl From<&Claim> for TrackingRow {
    fn from(claim: &Claim) -> Self {
        Self {
            id: claim.id(),
            lecturer_name: claim.lecturer_name().to_string(),
            date: format_date(claim.submitted_on()),
            hours: claim.hours().normalize().to_string(),
            hourly_rate: format_amount(claim.hourly_rate()),
            total_amount: format_amount(claim.total_amount()),
            status: claim.status(),
            status_color: status_color(claim.status()),
            notes: claim.notes().unwrap_or_default().to_string(),
            documents: claim.document_name().to_string(),
        }
    }
}

/// The lecturer's tracking list
///
/// Shows every claim regardless of who submitted it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackingView {
    pub rows: Vec<TrackingRow>,
}

impl TrackingView {
    pub fn from_claims(claims: &[Claim]) -> Self {
        Self {
            rows: claims.iter().map(TrackingRow::from).collect(),
        }
    }
}

impl fmt::Display for TrackingView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<8} {:<16} {:<14} {:>7} {:>10} {:>12}  {:<9} {}",
            "ID", "Lecturer", "Date", "Hours", "Rate", "Total", "Status", "Documents"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<8} {:<16} {:<14} {:>7} {:>10} {:>12}  {:<9} {}",
                row.id.to_string(),
                row.lecturer_name,
                row.date,
                row.hours,
                row.hourly_rate,
                row.total_amount,
                row.status.as_str(),
                row.documents
            )?;
        }
        Ok(())
    }
}

/// A pending claim as shown to a manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCard {
    pub id: ClaimId,
    pub lecturer_name: String,
    pub date: String,
    pub summary: String,
    pub notes: String,
    pub document_info: String,
}

impl From<&Claim> for PendingCard {
    fn from(claim: &Claim) -> Self {
        Self {
            id: claim.id(),
            lecturer_name: claim.lecturer_name().to_string(),
            date: format_date(claim.submitted_on()),
            summary: format!(
                "{} hours @ {}/hr = {}",
                claim.hours().normalize(),
                format_amount(claim.hourly_rate()),
                format_amount(claim.total_amount())
            ),
            notes: claim.notes().unwrap_or_default().to_string(),
            document_info: document_info(claim.document()),
        }
    }
}

/// The manager's queue of pending claims
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManagerView {
    pub cards: Vec<PendingCard>,
}

impl ManagerView {
    /// Builds the queue from pending claims
    pub fn from_pending(claims: &[Claim]) -> Self {
        Self {
            cards: claims
                .iter()
                .filter(|c| c.is_pending())
                .map(PendingCard::from)
                .collect(),
        }
    }

    /// True when the "no pending claims" placeholder should show
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for ManagerView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No pending claims to review.");
        }
        for card in &self.cards {
            writeln!(f, "[{}] {} - {}", card.id, card.lecturer_name, card.date)?;
            writeln!(f, "    {}", card.summary)?;
            if !card.notes.is_empty() {
                writeln!(f, "    {}", card.notes)?;
            }
            writeln!(f, "    {}", card.document_info)?;
        }
        Ok(())
    }
}
