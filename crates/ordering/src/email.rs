//! Email-notification contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use shoplite_core::ValueObject;

/// An email to send. Value object, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl ValueObject for Email {}

/// Outbound email transport.
///
/// Returns `true` on accepted delivery, `false` otherwise. No retry or
/// delivery-guarantee semantics; callers decide what a `false` means to them.
#[async_trait]
pub trait EmailService: Send + Sync {
    async fn send_email(&self, email: &Email) -> bool;
}

/// Dev/test transport: logs the email instead of sending it.
#[derive(Debug, Default)]
pub struct TracingEmailService;

impl TracingEmailService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmailService for TracingEmailService {
    async fn send_email(&self, email: &Email) -> bool {
        tracing::info!(to = %email.to, subject = %email.subject, "email sent (tracing transport)");
        true
    }
}
