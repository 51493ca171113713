//! Service desk configuration.

use serde::{Deserialize, Serialize};

/// Tunables shared by the repositories and the resolution workflow.
///
/// Every field has a default, so a partial JSON object is a valid
/// configuration.
///
/// # Examples
///
/// ```
/// use servicedesk::config::ServiceDeskConfig;
///
/// let config = ServiceDeskConfig::from_json(r#"{"ticketNumberPrefix": "INC-"}"#)
///     .expect("valid configuration");
/// assert_eq!(config.ticket_number_prefix(), "INC-");
/// assert_eq!(config.pending_feedback_limit(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceDeskConfig {
    pending_feedback_limit: usize,
    ticket_number_prefix: String,
    ticket_number_length: usize,
}

impl ServiceDeskConfig {
    /// Default cap on pending feedback records returned per query.
    pub const DEFAULT_PENDING_FEEDBACK_LIMIT: usize = 50;
    /// Default prefix of derived ticket numbers.
    pub const DEFAULT_TICKET_NUMBER_PREFIX: &'static str = "TK-";
    /// Default number of ticket-id characters in derived ticket numbers.
    pub const DEFAULT_TICKET_NUMBER_LENGTH: usize = 8;

    /// Parses a configuration from JSON, filling absent fields with
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the input is not a JSON object
    /// of the expected shape.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Sets the pending feedback query cap.
    #[must_use]
    pub const fn with_pending_feedback_limit(mut self, limit: usize) -> Self {
        self.pending_feedback_limit = limit;
        self
    }

    /// Sets the derived ticket number prefix.
    #[must_use]
    pub fn with_ticket_number_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.ticket_number_prefix = prefix.into();
        self
    }

    /// Sets how many ticket-id characters derived ticket numbers keep.
    #[must_use]
    pub const fn with_ticket_number_length(mut self, length: usize) -> Self {
        self.ticket_number_length = length;
        self
    }

    /// Returns the pending feedback query cap.
    #[must_use]
    pub const fn pending_feedback_limit(&self) -> usize {
        self.pending_feedback_limit
    }

    /// Returns the derived ticket number prefix.
    #[must_use]
    pub fn ticket_number_prefix(&self) -> &str {
        &self.ticket_number_prefix
    }

    /// Returns how many ticket-id characters derived ticket numbers keep.
    #[must_use]
    pub const fn ticket_number_length(&self) -> usize {
        self.ticket_number_length
    }
}

impl Default for ServiceDeskConfig {
    fn default() -> Self {
        Self {
            pending_feedback_limit: Self::DEFAULT_PENDING_FEEDBACK_LIMIT,
            ticket_number_prefix: Self::DEFAULT_TICKET_NUMBER_PREFIX.to_owned(),
            ticket_number_length: Self::DEFAULT_TICKET_NUMBER_LENGTH,
        }
    }
}
