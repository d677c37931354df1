use std::sync::Arc;
use tracing::{info, warn};

use crate::config::{MailSettings, SmtpTransport};
use crate::modules::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::modules::email::application::ports::outgoing::{ContactNotifier, EmailError};
use crate::modules::email::application::services::{ContactEmailService, DisabledContactNotifier};

/// Picks the notifier for the configured mail settings. Settings that cannot
/// produce a sender switch notification off; they never stop the site.
pub fn contact_notifier(settings: &MailSettings) -> Arc<dyn ContactNotifier> {
    let mail = match settings {
        MailSettings::Enabled(mail) => mail,
        MailSettings::Disabled(reason) => {
            warn!("Contact email notifications disabled: {reason}");
            return Arc::new(DisabledContactNotifier);
        }
    };

    let sender = match &mail.transport {
        SmtpTransport::Relay {
            server,
            username,
            password,
        } => SmtpEmailSender::new(server, username, password, &mail.from),
        SmtpTransport::Local { host, port } => {
            Ok(SmtpEmailSender::new_local(host, *port, &mail.from))
        }
    };

    notifier_for(sender, &mail.recipient)
}

fn notifier_for(
    sender: Result<SmtpEmailSender, EmailError>,
    recipient: &str,
) -> Arc<dyn ContactNotifier> {
    match sender {
        Ok(sender) => {
            info!("Contact notifications go to {recipient}");
            Arc::new(ContactEmailService::new(Arc::new(sender), recipient))
        }
        Err(e) => {
            warn!("Contact email notifications disabled, SMTP setup failed: {e}");
            Arc::new(DisabledContactNotifier)
        }
    }
}
