use crate::notify::{NotificationId, NotificationQueue};

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Value of the form control's `name` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Message => "Your Message",
        }
    }
}

/// In-progress contents of the contact form. Never leaves the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Takes the current values, leaving the draft empty.
    pub fn take(&mut self) -> ContactDraft {
        std::mem::take(self)
    }
}

/// Handle a form submission: there is no delivery, so this always succeeds with one
/// notification and an emptied draft.
pub fn submit_contact(draft: &mut ContactDraft, queue: &mut NotificationQueue) -> NotificationId {
    let sent = draft.take();
    log::debug!(
        "contact form submitted ({} chars of message)",
        sent.message.chars().count()
    );
    queue.success(SUBMIT_SUCCESS_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactDraft {
        let mut draft = ContactDraft::default();
        draft.set(Field::Name, "Ada".to_string());
        draft.set(Field::Email, "ada@example.com".to_string());
        draft.set(Field::Message, "Hello there".to_string());
        draft
    }

    #[test]
    fn test_field_names() {
        let names: Vec<&str> = Field::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["name", "email", "message"]);
        assert_eq!(Field::Message.placeholder(), "Your Message");
    }

    #[test]
    fn test_keystrokes_update_one_field() {
        let mut draft = ContactDraft::default();
        draft.set(Field::Name, "A".to_string());
        draft.set(Field::Name, "Ad".to_string());
        assert_eq!(draft.get(Field::Name), "Ad");
        assert_eq!(draft.get(Field::Email), "");
        assert_eq!(draft.get(Field::Message), "");
        assert_ne!(draft, ContactDraft::default());
    }

    #[test]
    fn test_submit_clears_and_notifies_once() {
        let mut draft = filled();
        let mut queue = NotificationQueue::new();

        let id = submit_contact(&mut draft, &mut queue);

        assert_eq!(draft, ContactDraft::default());
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, id);
        assert_eq!(queue.items()[0].message, SUBMIT_SUCCESS_MESSAGE);
    }

    #[test]
    fn test_take_returns_values() {
        let mut draft = filled();
        let sent = draft.take();
        assert_eq!(sent.name, "Ada");
        assert_eq!(sent.email, "ada@example.com");
        assert_eq!(draft, ContactDraft::default());
    }
}
