use neuralchat_core::actions::ContactForm;

mod core;
mod forms;
mod scroll;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Effect {
    SaveConfig,
    ScrollTo(f32),
    SyncGalleryTrack(f32),
    SubmitContact(ContactForm),
    OpenLink(String),
}
