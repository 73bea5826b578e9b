#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// A short-lived notification shown in the corner of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn message_sent() -> Self {
        Self {
            title: "Message Sent!".to_string(),
            description: "Thank you for your interest. We'll get back to you soon.".to_string(),
            variant: ToastVariant::Default,
        }
    }

    pub fn message_failed(fallback_email: &str) -> Self {
        Self {
            title: "Error".to_string(),
            description: format!(
                "Failed to send message. Please try again or email us directly at {}",
                fallback_email
            ),
            variant: ToastVariant::Destructive,
        }
    }
}

pub trait Notifier {
    fn notify(&self, toast: Toast);
}
