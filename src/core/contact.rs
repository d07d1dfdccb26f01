use thiserror::Error;

/// Contact form payload. Field values are taken as-is; the form applies no
/// validation of its own.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("submission endpoint rejected the message: {0}")]
    Rejected(String),
}

/// Where a submitted message goes. The form acknowledges the user and clears
/// the fields only after the sink reports success.
pub trait MessageSink {
    fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError>;
}

/// Local-only sink: records the submission in the console log and succeeds.
pub struct LogSink;

impl MessageSink for LogSink {
    fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        log::info!(
            "contact form submitted: name={:?} email={:?} message={:?}",
            message.name,
            message.email,
            message.message
        );
        Ok(())
    }
}

pub const ACKNOWLEDGMENT: &str = "Thank you for your message! I will get back to you soon.";
