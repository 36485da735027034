use crate::application::ports::contact::ContactNotifier;
use crate::domain::{contact::ContactMessage, errors::DomainResult};
use async_trait::async_trait;

/// Records contact submissions in the service log. There is no mail relay
/// configured for the site yet.
#[derive(Default, Clone)]
pub struct LogContactNotifier;

#[async_trait]
impl ContactNotifier for LogContactNotifier {
    async fn notify(&self, message: &ContactMessage) -> DomainResult<()> {
        tracing::info!(
            name = %message.name,
            phone = message.phone.as_deref().unwrap_or("-"),
            body = %message.message,
            "new contact message"
        );
        Ok(())
    }
}
