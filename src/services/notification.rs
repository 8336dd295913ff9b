use log::info;

use crate::services::Notifier;

/// Keeps reported messages so the page can render them after a rejected
/// submission
#[derive(Debug, Default)]
pub struct PageNotifier {
    messages: Vec<String>,
}

impl PageNotifier {
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl Notifier for PageNotifier {
    fn report(&mut self, messages: &[String]) {
        info!("checkout form rejected: {}", messages.join(" | "));
        self.messages = messages.to_vec();
    }
}
