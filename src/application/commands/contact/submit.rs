use super::ContactCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{contact::ContactMessage, errors::DomainError},
};

pub struct SubmitContactCommand {
    pub name: String,
    pub phone: Option<String>,
    pub message: String,
}

impl ContactCommandService {
    pub async fn submit(&self, command: SubmitContactCommand) -> ApplicationResult<()> {
        let message = ContactMessage::new(
            &command.name,
            command.phone.as_deref(),
            &command.message,
        )
        .map_err(|err| match err {
            DomainError::Validation(msg) => ApplicationError::validation(msg),
            other => ApplicationError::from(other),
        })?;

        self.notifier.notify(&message).await?;
        Ok(())
    }
}
