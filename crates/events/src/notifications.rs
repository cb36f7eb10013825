//! Messages sent when visitors submit the public forms.
//!
//! Each submission produces an acknowledgement to the visitor and, when an
//! admin inbox is configured, a notification with `Reply-To` set to the
//! visitor.

use ngocms_db::models::enquiry::Enquiry;
use ngocms_db::models::join_application::JoinApplication;

use crate::mailer::EmailMessage;

/// Organisation name used in subjects and sign-offs.
const ORG_NAME: &str = "NGO CMS";

pub fn enquiry_acknowledgement(enquiry: &Enquiry) -> EmailMessage {
    EmailMessage::new(
        &enquiry.email,
        format!("[{ORG_NAME}] We received your enquiry: {}", enquiry.subject),
        format!(
            "Dear {},\n\nThank you for writing to us. Our team will get back to you soon.\n\n\
             Your message:\n{}\n\nRegards,\n{ORG_NAME}",
            enquiry.name, enquiry.message
        ),
    )
}

pub fn enquiry_notification(enquiry: &Enquiry, admin_email: &str) -> EmailMessage {
    EmailMessage::new(
        admin_email,
        format!("[{ORG_NAME}] New enquiry #{}: {}", enquiry.id, enquiry.subject),
        format!(
            "Name: {}\nEmail: {}\nPhone: {}\n\n{}",
            enquiry.name,
            enquiry.email,
            enquiry.phone.as_deref().unwrap_or("-"),
            enquiry.message
        ),
    )
    .with_reply_to(&enquiry.email)
}

pub fn application_acknowledgement(application: &JoinApplication) -> EmailMessage {
    EmailMessage::new(
        &application.email,
        format!("[{ORG_NAME}] Thank you for applying"),
        format!(
            "Dear {},\n\nThank you for your interest in {}. We have received your \
             application and will contact you after review.\n\nRegards,\n{ORG_NAME}",
            application.name, application.area_of_interest
        ),
    )
}

pub fn application_notification(application: &JoinApplication, admin_email: &str) -> EmailMessage {
    EmailMessage::new(
        admin_email,
        format!(
            "[{ORG_NAME}] New join application #{}: {}",
            application.id, application.area_of_interest
        ),
        format!(
            "Name: {}\nEmail: {}\nPhone: {}\nResume: {}\n\n{}",
            application.name,
            application.email,
            application.phone.as_deref().unwrap_or("-"),
            application.resume_url.as_deref().unwrap_or("-"),
            application.message.as_deref().unwrap_or("")
        ),
    )
    .with_reply_to(&application.email)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn enquiry() -> Enquiry {
        let now = Utc::now();
        Enquiry {
            id: 7,
            name: "Ravi".into(),
            email: "ravi@example.org".into(),
            phone: None,
            subject: "Donation receipt".into(),
            message: "Please send my 80G receipt.".into(),
            is_resolved: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn acknowledgement_goes_to_visitor() {
        let msg = enquiry_acknowledgement(&enquiry());
        assert_eq!(msg.to, "ravi@example.org");
        assert!(msg.subject.contains("Donation receipt"));
        assert!(msg.body.starts_with("Dear Ravi,"));
        assert!(msg.reply_to.is_none());
    }

    #[test]
    fn notification_replies_to_visitor() {
        let msg = enquiry_notification(&enquiry(), "office@example.org");
        assert_eq!(msg.to, "office@example.org");
        assert_eq!(msg.reply_to.as_deref(), Some("ravi@example.org"));
        assert!(msg.subject.contains("#7"));
        assert!(msg.body.contains("Phone: -"));
    }
}
