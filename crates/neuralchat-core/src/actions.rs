//! User actions the sections trigger: plan routing, forms, invoice mail and
//! the testimonial carousel. Side effects stay with the caller.

use crate::content::{Plan, PlanStatus, SectionName};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),
}

/// What clicking a plan's call to action does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    ScrollTo(SectionName),
    OpenPaymentDialog(PaymentDialog),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentChoice {
    PayOnline,
    RequestInvoice,
}

impl PaymentChoice {
    pub const ALL: [PaymentChoice; 2] = [PaymentChoice::PayOnline, PaymentChoice::RequestInvoice];

    pub fn label(self) -> &'static str {
        match self {
            PaymentChoice::PayOnline => "Pay online",
            PaymentChoice::RequestInvoice => "Request invoice",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentDialog {
    pub plan_id: u32,
    pub plan_name: String,
    pub price: String,
    pub period: String,
    pub payment_url: String,
}

impl PaymentDialog {
    pub fn invoice_request(&self) -> InvoiceRequest {
        InvoiceRequest {
            plan: self.plan_name.clone(),
            ..InvoiceRequest::default()
        }
    }
}

pub fn plan_action(plan: &Plan) -> PlanAction {
    if matches!(
        plan.status,
        Some(PlanStatus::Custom) | Some(PlanStatus::Enterprise)
    ) {
        return PlanAction::ScrollTo(SectionName::Contact);
    }
    match plan.payment_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => PlanAction::OpenPaymentDialog(PaymentDialog {
            plan_id: plan.id,
            plan_name: plan.name.clone(),
            price: plan.price.clone(),
            period: plan.period.clone(),
            payment_url: url.to_string(),
        }),
        _ => PlanAction::ScrollTo(SectionName::Contact),
    }
}

pub fn validate_email(email: &str) -> Result<(), ActionError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ActionError::MissingField("email"));
    }
    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !email.contains(char::is_whitespace) =>
        {
            Ok(())
        }
        _ => Err(ActionError::InvalidEmail(email.to_string())),
    }
}

fn require(value: &str, field: &'static str) -> Result<(), ActionError> {
    if value.trim().is_empty() {
        Err(ActionError::MissingField(field))
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ActionError> {
        require(&self.name, "name")?;
        validate_email(&self.email)?;
        require(&self.message, "message")
    }

    /// Copy with surrounding whitespace removed, as it is submitted.
    pub fn trimmed(&self) -> ContactForm {
        ContactForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRequest {
    pub plan: String,
    pub company: String,
    pub contact_name: String,
    pub email: String,
    #[serde(default)]
    pub vat_number: String,
}

impl InvoiceRequest {
    pub fn validate(&self) -> Result<(), ActionError> {
        require(&self.company, "company")?;
        require(&self.contact_name, "contact name")?;
        validate_email(&self.email)
    }
}

/// `mailto:` URL asking sales to invoice the chosen plan.
pub fn compose_invoice_email(to: &str, request: &InvoiceRequest) -> String {
    let subject = format!("Invoice request: {}", request.plan.trim());
    let mut body = format!(
        "Please send an invoice for the {} plan.\n\nCompany: {}\nContact: {}\nEmail: {}\n",
        request.plan.trim(),
        request.company.trim(),
        request.contact_name.trim(),
        request.email.trim(),
    );
    if !request.vat_number.trim().is_empty() {
        body.push_str(&format!("VAT number: {}\n", request.vat_number.trim()));
    }
    format!(
        "mailto:{}?subject={}&body={}",
        to.trim(),
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

/// Notice shown for a solution's "learn more" action.
pub fn solution_notice(title: &str) -> String {
    format!(
        "Learn more about our {} solution. Contact our sales team for a customized demo.",
        title.trim()
    )
}

/// Notice for a footer quick link that has no section of its own.
pub fn quick_link_notice(label: &str) -> String {
    format!(
        "{} page coming soon! Contact our team for more information.",
        label.trim()
    )
}

/// Newsletter sign-up; returns the message to show on success.
pub fn subscribe_newsletter(email: &str, thank_you: &str) -> Result<String, ActionError> {
    validate_email(email)?;
    Ok(thank_you.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TestimonialCarousel {
    index: usize,
    len: usize,
}

impl TestimonialCarousel {
    pub fn new(len: usize) -> Self {
        TestimonialCarousel { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    pub fn select(&mut self, index: usize) -> usize {
        if index < self.len {
            self.index = index;
        }
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentRegistry;

    fn plans() -> Vec<Plan> {
        ContentRegistry::builtin()
            .expect("bundled content must parse")
            .pricing()
            .plans
            .clone()
    }

    #[test]
    fn paid_plan_opens_payment_dialog() {
        let plans = plans();
        match plan_action(&plans[0]) {
            PlanAction::OpenPaymentDialog(dialog) => {
                assert_eq!(dialog.plan_name, "Chat plugins");
                assert_eq!(dialog.payment_url, "https://www.paypal.com");
                assert_eq!(dialog.invoice_request().plan, "Chat plugins");
            }
            other => panic!("expected payment dialog, got {other:?}"),
        }
    }

    #[test]
    fn enterprise_and_custom_go_to_contact() {
        let plans = plans();
        assert_eq!(
            plan_action(&plans[2]),
            PlanAction::ScrollTo(SectionName::Contact)
        );
        assert_eq!(
            plan_action(&plans[3]),
            PlanAction::ScrollTo(SectionName::Contact)
        );
    }

    #[test]
    fn blank_payment_url_falls_back_to_contact() {
        let mut plan = plans()[0].clone();
        plan.payment_url = Some("  ".into());
        assert_eq!(plan_action(&plan), PlanAction::ScrollTo(SectionName::Contact));
    }

    #[test]
    fn contact_form_requires_fields() {
        let mut form = ContactForm::default();
        assert_eq!(form.validate(), Err(ActionError::MissingField("name")));
        form.name = "Ada".into();
        assert_eq!(form.validate(), Err(ActionError::MissingField("email")));
        form.email = "ada.example.com".into();
        assert!(matches!(form.validate(), Err(ActionError::InvalidEmail(_))));
        form.email = "ada@example.com".into();
        assert_eq!(form.validate(), Err(ActionError::MissingField("message")));
        form.message = "Hello".into();
        assert_eq!(form.validate(), Ok(()), "phone stays optional");
    }

    #[test]
    fn email_needs_text_on_both_sides() {
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ada@").is_err());
        assert!(validate_email("a da@example.com").is_err());
        assert!(validate_email(" ada@example.com ").is_ok());
    }

    #[test]
    fn invoice_mail_is_percent_encoded() {
        let request = InvoiceRequest {
            plan: "Chat plugins".into(),
            company: "Acme & Co".into(),
            contact_name: "Ada".into(),
            email: "ada@acme.test".into(),
            vat_number: String::new(),
        };
        let url = compose_invoice_email("enterprise@neuralchat.ai", &request);
        assert!(url.starts_with("mailto:enterprise@neuralchat.ai?subject=Invoice%20request%3A%20Chat%20plugins&body="));
        assert!(url.contains("Acme%20%26%20Co"));
        assert!(!url.contains("VAT"), "empty VAT number is omitted");
        assert!(!url[7..].contains(' '));
    }

    #[test]
    fn invoice_request_validation() {
        let mut request = InvoiceRequest {
            plan: "ENTERPRISE".into(),
            ..InvoiceRequest::default()
        };
        assert_eq!(request.validate(), Err(ActionError::MissingField("company")));
        request.company = "Acme".into();
        request.contact_name = "Ada".into();
        request.email = "ada@acme.test".into();
        request.vat_number = "GB123".into();
        assert_eq!(request.validate(), Ok(()));
        assert!(compose_invoice_email("x@y.z", &request).contains("VAT%20number%3A%20GB123"));
    }

    #[test]
    fn carousel_wraps_both_ways() {
        let mut carousel = TestimonialCarousel::new(3);
        assert_eq!(carousel.prev(), 2);
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.next(), 1);
        assert_eq!(carousel.select(7), 1);
        assert_eq!(carousel.select(2), 2);
        assert_eq!(carousel.next(), 0);

        let mut empty = TestimonialCarousel::new(0);
        assert_eq!(empty.next(), 0);
        assert_eq!(empty.prev(), 0);
    }

    #[test]
    fn newsletter_returns_thank_you() {
        assert_eq!(
            subscribe_newsletter("ada@acme.test", "Thanks!"),
            Ok("Thanks!".to_string())
        );
        assert!(subscribe_newsletter("", "Thanks!").is_err());
    }

    #[test]
    fn notices_name_their_subject() {
        assert_eq!(
            solution_notice(" Sales Automation "),
            "Learn more about our Sales Automation solution. Contact our sales team for a customized demo."
        );
        assert_eq!(
            quick_link_notice("Blog"),
            "Blog page coming soon! Contact our team for more information."
        );
    }
}
