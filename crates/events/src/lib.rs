//! Outbound email for the NGO CMS.
//!
//! - [`Mailer`] sends one [`EmailMessage`]; [`SmtpMailer`] talks SMTP via
//!   `lettre`, [`LogMailer`] only logs (used when SMTP is not configured).
//! - [`EmailQueue`] hands messages to a background worker so request
//!   handlers never wait on SMTP, retrying failures per [`RetryPolicy`].
//! - [`notifications`] builds the messages sent for public submissions.

pub mod mailer;
pub mod notifications;
pub mod queue;

pub use mailer::{EmailConfig, EmailError, EmailMessage, LogMailer, Mailer, SmtpMailer};
pub use queue::{EmailQueue, EnqueueError, RetryPolicy};
