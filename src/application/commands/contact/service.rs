use std::sync::Arc;

use crate::application::ports::contact::ContactNotifier;

pub struct ContactCommandService {
    pub(super) notifier: Arc<dyn ContactNotifier>,
}

impl ContactCommandService {
    pub fn new(notifier: Arc<dyn ContactNotifier>) -> Self {
        Self { notifier }
    }
}
