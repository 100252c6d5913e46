use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// Value of the input's `name` and `id` attributes.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    /// First required field that is blank.
    pub fn missing_field(&self) -> Option<ContactField> {
        ContactField::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(ContactField),
    #[error("a message is already being sent")]
    AlreadySubmitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub title: &'static str,
    pub description: &'static str,
}

pub const MESSAGE_SENT: Notification = Notification {
    title: "Message sent successfully!",
    description: "Thank you for reaching out. I'll get back to you soon.",
};

/// Draft and submission state of the contact form.
///
/// Sending is simulated: the caller waits a fixed delay between
/// [`ContactForm::begin_submit`] and [`ContactForm::finish_submit`]. Nothing
/// leaves the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: ContactMessage,
    submitting: bool,
}

impl ContactForm {
    pub fn draft(&self) -> &ContactMessage {
        &self.draft
    }

    pub fn field(&self, field: ContactField) -> &str {
        self.draft.get(field)
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        *self.draft.get_mut(field) = value.into();
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Enters the submitting state and returns the message being sent.
    ///
    /// A second call while a submission is pending is rejected and leaves the
    /// pending one untouched.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, ContactError> {
        if self.submitting {
            return Err(ContactError::AlreadySubmitting);
        }
        if let Some(field) = self.draft.missing_field() {
            return Err(ContactError::MissingField(field));
        }
        self.submitting = true;
        Ok(self.draft.clone())
    }

    /// Completes the pending submission: clears every field and yields the
    /// success notification. Returns `None` if nothing was pending.
    pub fn finish_submit(&mut self) -> Option<Notification> {
        if !self.submitting {
            return None;
        }
        self.submitting = false;
        self.draft = ContactMessage::default();
        Some(MESSAGE_SENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{ManualScheduler, TaskGroup};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "A");
        form.set(ContactField::Email, "a@b.com");
        form.set(ContactField::Subject, "S");
        form.set(ContactField::Message, "M");
        form
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        let mut form = ContactForm::default();
        assert_eq!(
            form.begin_submit(),
            Err(ContactError::MissingField(ContactField::Name))
        );
        form.set(ContactField::Name, "A");
        form.set(ContactField::Email, "a@b.com");
        form.set(ContactField::Subject, "   ");
        assert_eq!(
            form.begin_submit(),
            Err(ContactError::MissingField(ContactField::Subject))
        );
        assert!(!form.is_submitting());
        assert_eq!(
            ContactError::MissingField(ContactField::Email).to_string(),
            "email is required"
        );
    }

    #[test]
    fn test_submit_then_finish_resets_fields() {
        let mut form = filled();
        let sent = form.begin_submit().expect("form is complete");
        assert_eq!(sent.email, "a@b.com");
        assert!(form.is_submitting());
        // the draft survives until the simulated send completes
        assert_eq!(form.field(ContactField::Message), "M");

        assert_eq!(form.finish_submit(), Some(MESSAGE_SENT));
        assert!(!form.is_submitting());
        for field in ContactField::ALL {
            assert_eq!(form.field(field), "");
        }
        assert_eq!(form.finish_submit(), None);
    }

    #[test]
    fn test_second_submit_is_ignored_while_pending() {
        let mut form = filled();
        assert!(form.begin_submit().is_ok());
        assert_eq!(form.begin_submit(), Err(ContactError::AlreadySubmitting));
        assert!(form.is_submitting());
    }

    #[test]
    fn test_simulated_submission_scenario() {
        let clock = ManualScheduler::default();
        let tasks = TaskGroup::new(clock.clone());
        let form = Rc::new(RefCell::new(filled()));
        let notifications = Rc::new(RefCell::new(Vec::new()));
        let delay = Duration::from_millis(1000);

        let submit = || {
            if form.borrow_mut().begin_submit().is_ok() {
                let form = Rc::clone(&form);
                let notifications = Rc::clone(&notifications);
                tasks.spawn_after(delay, move || {
                    if let Some(n) = form.borrow_mut().finish_submit() {
                        notifications.borrow_mut().push(n);
                    }
                });
            }
        };
        submit();
        submit();
        assert_eq!(clock.pending(), 1);

        clock.advance(Duration::from_millis(999));
        assert!(form.borrow().is_submitting());
        assert!(notifications.borrow().is_empty());

        clock.advance(Duration::from_millis(1));
        assert!(!form.borrow().is_submitting());
        assert_eq!(*form.borrow().draft(), ContactMessage::default());
        assert_eq!(*notifications.borrow(), vec![MESSAGE_SENT]);

        clock.advance(Duration::from_secs(10));
        assert_eq!(notifications.borrow().len(), 1);
    }

    #[test]
    fn test_message_serializes_with_field_keys() {
        let msg = filled().draft().clone();
        let json = serde_json::to_value(&msg).expect("message serializes");
        for field in ContactField::ALL {
            assert_eq!(json[field.key()], msg.get(field));
        }
    }
}
