use super::super::messages::{ContactField, InvoiceField};
use super::super::state::{App, PaymentDialogState, StatusLine};
use super::Effect;
use neuralchat_core::actions::{
    ContactForm, PaymentChoice, PlanAction, compose_invoice_email, plan_action,
    subscribe_newsletter,
};
use std::path::PathBuf;
use tracing::{info, warn};

impl App {
    pub(super) fn handle_plan_selected(&mut self, plan_id: u32, effects: &mut Vec<Effect>) {
        let Some(plan) = self
            .content
            .pricing()
            .plans
            .iter()
            .find(|plan| plan.id == plan_id)
        else {
            warn!(plan_id, "Unknown plan selected");
            return;
        };
        match plan_action(plan) {
            PlanAction::ScrollTo(section) => self.handle_navigate(section, effects),
            PlanAction::OpenPaymentDialog(dialog) => {
                info!(plan = %dialog.plan_name, "Opening payment dialog");
                self.ui.payment = Some(PaymentDialogState::new(dialog));
            }
        }
    }

    pub(super) fn handle_payment_choice(&mut self, choice: PaymentChoice, effects: &mut Vec<Effect>) {
        let Some(payment) = self.ui.payment.as_mut() else {
            return;
        };
        match choice {
            PaymentChoice::PayOnline => {
                effects.push(Effect::OpenLink(payment.dialog.payment_url.clone()));
                self.ui.payment = None;
            }
            PaymentChoice::RequestInvoice => {
                if payment.invoice.is_none() {
                    payment.invoice = Some(payment.dialog.invoice_request());
                }
            }
        }
    }

    pub(super) fn handle_close_dialog(&mut self) {
        self.ui.payment = None;
    }

    pub(super) fn handle_invoice_field_changed(&mut self, field: InvoiceField, value: String) {
        let Some(payment) = self.ui.payment.as_mut() else {
            return;
        };
        let Some(invoice) = payment.invoice.as_mut() else {
            return;
        };
        match field {
            InvoiceField::Company => invoice.company = value,
            InvoiceField::ContactName => invoice.contact_name = value,
            InvoiceField::Email => invoice.email = value,
            InvoiceField::VatNumber => invoice.vat_number = value,
        }
        payment.error = None;
    }

    pub(super) fn handle_submit_invoice(&mut self, effects: &mut Vec<Effect>) {
        let Some(payment) = self.ui.payment.as_mut() else {
            return;
        };
        let Some(invoice) = payment.invoice.as_ref() else {
            return;
        };
        match invoice.validate() {
            Ok(()) => {
                let url = compose_invoice_email(&self.config.sales_email, invoice);
                info!(plan = %invoice.plan, "Composing invoice request");
                effects.push(Effect::OpenLink(url));
                self.ui.payment = None;
                self.ui.status = Some(StatusLine::info(
                    "Your invoice request is ready in your mail client.",
                ));
            }
            Err(err) => payment.error = Some(err.to_string()),
        }
    }

    pub(super) fn handle_contact_field_changed(&mut self, field: ContactField, value: String) {
        let form = &mut self.ui.contact.form;
        match field {
            ContactField::Name => form.name = value,
            ContactField::Email => form.email = value,
            ContactField::Phone => form.phone = value,
            ContactField::Message => form.message = value,
        }
        self.ui.contact.error = None;
    }

    pub(super) fn handle_submit_contact(&mut self, effects: &mut Vec<Effect>) {
        if self.ui.contact.submitting {
            return;
        }
        let form = self.ui.contact.form.trimmed();
        match form.validate() {
            Ok(()) => {
                self.ui.contact.submitting = true;
                self.ui.contact.error = None;
                effects.push(Effect::SubmitContact(form));
            }
            Err(err) => self.ui.contact.error = Some(err.to_string()),
        }
    }

    pub(super) fn handle_contact_saved(&mut self, result: Result<PathBuf, String>) {
        self.ui.contact.submitting = false;
        match result {
            Ok(path) => {
                info!(path = %path.display(), "Contact submission saved");
                self.ui.contact.form = ContactForm::default();
                self.ui.status = Some(StatusLine::info(
                    self.content.contact().success_message.clone(),
                ));
            }
            Err(err) => {
                warn!("Contact submission failed: {err}");
                self.ui.contact.error = Some(format!("Could not send your message: {err}"));
            }
        }
    }

    pub(super) fn handle_subscribe_newsletter(&mut self) {
        let thank_you = &self.content.footer().subscribe_alert_message;
        match subscribe_newsletter(&self.ui.newsletter.email, thank_you) {
            Ok(message) => {
                info!("Newsletter subscription recorded");
                self.ui.newsletter.email.clear();
                self.ui.newsletter.error = None;
                self.ui.status = Some(StatusLine::info(message));
            }
            Err(err) => self.ui.newsletter.error = Some(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::messages::Message;
    use crate::app::testing::build_test_app;
    use neuralchat_core::SectionName;

    #[test]
    fn paid_plan_opens_dialog_and_pays_online() {
        let mut app = build_test_app(true);
        let effects = app.reduce(Message::PlanSelected(1));
        assert!(effects.is_empty());
        assert!(app.ui.payment.is_some());

        let effects = app.reduce(Message::PaymentChoiceSelected(PaymentChoice::PayOnline));
        assert_eq!(effects, vec![Effect::OpenLink("https://www.paypal.com".into())]);
        assert!(app.ui.payment.is_none());
    }

    #[test]
    fn enterprise_plan_scrolls_to_contact() {
        let mut app = build_test_app(true);
        let effects = app.reduce(Message::PlanSelected(3));
        let target = app.layout.section_offset(SectionName::Contact);
        assert_eq!(effects.first(), Some(&Effect::ScrollTo(target)));
        assert!(app.ui.payment.is_none());
    }

    #[test]
    fn invoice_flow_validates_then_opens_mail() {
        let mut app = build_test_app(true);
        app.reduce(Message::PlanSelected(2));
        app.reduce(Message::PaymentChoiceSelected(PaymentChoice::RequestInvoice));
        assert!(app.reduce(Message::SubmitInvoice).is_empty());
        let error = app
            .ui
            .payment
            .as_ref()
            .and_then(|payment| payment.error.clone())
            .expect("validation error shown");
        assert!(error.contains("company"));

        app.reduce(Message::InvoiceFieldChanged(InvoiceField::Company, "Acme".into()));
        app.reduce(Message::InvoiceFieldChanged(InvoiceField::ContactName, "Ada".into()));
        app.reduce(Message::InvoiceFieldChanged(InvoiceField::Email, "ada@acme.test".into()));
        let effects = app.reduce(Message::SubmitInvoice);
        match effects.as_slice() {
            [Effect::OpenLink(url)] => {
                assert!(url.starts_with("mailto:enterprise@neuralchat.ai?subject="));
                assert!(url.contains("AI%20PLUGINS%20SUPPORTS"));
            }
            other => panic!("expected one mail link, got {other:?}"),
        }
        assert!(app.ui.payment.is_none());
    }

    #[test]
    fn escape_closes_dialog() {
        let mut app = build_test_app(true);
        app.reduce(Message::PlanSelected(1));
        app.reduce(Message::EscapePressed);
        assert!(app.ui.payment.is_none());
    }

    #[test]
    fn contact_submission_round_trip() {
        let mut app = build_test_app(true);
        assert!(app.reduce(Message::SubmitContact).is_empty());
        assert!(app.ui.contact.error.is_some());

        app.reduce(Message::ContactFieldChanged(ContactField::Name, " Ada ".into()));
        app.reduce(Message::ContactFieldChanged(ContactField::Email, "ada@acme.test".into()));
        app.reduce(Message::ContactFieldChanged(ContactField::Message, "Hello".into()));
        let effects = app.reduce(Message::SubmitContact);
        match effects.as_slice() {
            [Effect::SubmitContact(form)] => assert_eq!(form.name, "Ada"),
            other => panic!("expected submission, got {other:?}"),
        }
        assert!(app.ui.contact.submitting);
        assert!(app.reduce(Message::SubmitContact).is_empty(), "no double submit");

        app.reduce(Message::ContactSaved(Ok(PathBuf::from("/tmp/x.toml"))));
        assert!(!app.ui.contact.submitting);
        assert_eq!(app.ui.contact.form, ContactForm::default());
        assert_eq!(
            app.ui.status.as_ref().map(|status| status.text.as_str()),
            Some(app.content.contact().success_message.as_str())
        );
    }

    #[test]
    fn failed_contact_save_keeps_the_form() {
        let mut app = build_test_app(true);
        app.ui.contact.form.name = "Ada".into();
        app.ui.contact.submitting = true;
        app.reduce(Message::ContactSaved(Err("disk full".into())));
        assert_eq!(app.ui.contact.form.name, "Ada");
        assert!(app.ui.contact.error.as_deref().is_some_and(|e| e.contains("disk full")));
    }

    #[test]
    fn newsletter_shows_thank_you() {
        let mut app = build_test_app(true);
        app.reduce(Message::SubscribeNewsletter);
        assert!(app.ui.newsletter.error.is_some());
        app.reduce(Message::NewsletterEmailChanged("ada@acme.test".into()));
        app.reduce(Message::SubscribeNewsletter);
        assert!(app.ui.newsletter.email.is_empty());
        let status = app.ui.status.clone().expect("thank-you shown");
        assert_eq!(status.text, app.content.footer().subscribe_alert_message);
    }
}
