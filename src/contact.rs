use std::time::Duration;

pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1000);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitting: bool,
    pub status: SubmitStatus,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0:?} is required")]
    Missing(ContactField),

    #[error("email address looks invalid")]
    InvalidEmail,
}

impl ContactForm {
    pub fn update(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Message, &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::Missing(field));
            }
        }
        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
            _ => Err(ContactError::InvalidEmail),
        }
    }

    /// Enter the submitting state. Returns `false` if already submitting.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Settle a submission; a successful one clears the fields.
    pub fn finish_submit(&mut self, result: Result<(), ContactError>) {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.status = SubmitStatus::Success;
            }
            Err(err) => {
                tracing::debug!("contact submission failed: {}", err);
                self.status = SubmitStatus::Error;
            }
        }
    }
}

/// Simulated delivery; nothing leaves the process.
pub async fn deliver(form: ContactForm, delay: Duration) -> Result<(), ContactError> {
    form.validate()?;
    tokio::time::sleep(delay).await;
    tracing::info!(email = %form.email.trim(), "contact message accepted");
    Ok(())
}
