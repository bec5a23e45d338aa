use neuralchat_core::actions::{ContactForm, InvoiceRequest, PaymentDialog, TestimonialCarousel};

pub struct PaymentDialogState {
    pub(in crate::app) dialog: PaymentDialog,
    /// Present once the visitor chose to be invoiced.
    pub(in crate::app) invoice: Option<InvoiceRequest>,
    pub(in crate::app) error: Option<String>,
}

impl PaymentDialogState {
    pub(in crate::app) fn new(dialog: PaymentDialog) -> Self {
        PaymentDialogState {
            dialog,
            invoice: None,
            error: None,
        }
    }
}

#[derive(Default)]
pub struct ContactState {
    pub(in crate::app) form: ContactForm,
    pub(in crate::app) submitting: bool,
    pub(in crate::app) error: Option<String>,
}

#[derive(Default)]
pub struct NewsletterState {
    pub(in crate::app) email: String,
    pub(in crate::app) error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub(in crate::app) text: String,
    pub(in crate::app) is_error: bool,
}

impl StatusLine {
    pub(in crate::app) fn info(text: impl Into<String>) -> Self {
        StatusLine {
            text: text.into(),
            is_error: false,
        }
    }

    pub(in crate::app) fn error(text: impl Into<String>) -> Self {
        StatusLine {
            text: text.into(),
            is_error: true,
        }
    }
}

pub struct UiState {
    pub(in crate::app) payment: Option<PaymentDialogState>,
    pub(in crate::app) contact: ContactState,
    pub(in crate::app) newsletter: NewsletterState,
    pub(in crate::app) carousel: TestimonialCarousel,
    pub(in crate::app) active_solution: usize,
    pub(in crate::app) status: Option<StatusLine>,
}

impl UiState {
    pub(in crate::app) fn new(testimonials: usize) -> Self {
        UiState {
            payment: None,
            contact: ContactState::default(),
            newsletter: NewsletterState::default(),
            carousel: TestimonialCarousel::new(testimonials),
            active_solution: 0,
            status: None,
        }
    }
}
