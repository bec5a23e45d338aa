use neuralchat_core::SectionName;
use neuralchat_core::actions::PaymentChoice;
use std::path::PathBuf;
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    Scrolled {
        offset_y: f32,
        viewport_width: f32,
        viewport_height: f32,
    },
    WindowResized {
        width: f32,
        height: f32,
    },
    Frame(Instant),
    DecodeTick(Instant),
    EscapePressed,
    Navigate(SectionName),
    ToggleTheme,
    PlanSelected(u32),
    PaymentChoiceSelected(PaymentChoice),
    CloseDialog,
    InvoiceFieldChanged(InvoiceField, String),
    SubmitInvoice,
    ContactFieldChanged(ContactField, String),
    SubmitContact,
    ContactSaved(Result<PathBuf, String>),
    NewsletterEmailChanged(String),
    SubscribeNewsletter,
    SolutionHovered(usize),
    SolutionLearnMore(usize),
    QuickLinkSelected(String),
    TestimonialNext,
    TestimonialPrev,
    TestimonialSelected(usize),
    OpenLink(String),
    LinkOpened(Result<(), String>),
    DismissStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceField {
    Company,
    ContactName,
    Email,
    VatNumber,
}
