use super::super::super::messages::Message;
use super::super::super::state::{App, GALLERY_TRACK_ID, PAGE_SCROLL_ID};
use super::super::Effect;
use crate::config::serialize_config;
use crate::links::open_external;
use crate::outbox::save_submission;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard::{self, key};
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::window;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::SaveConfig => {
                self.save_config();
                Task::none()
            }
            Effect::ScrollTo(y) => {
                scrollable::scroll_to(PAGE_SCROLL_ID.clone(), AbsoluteOffset { x: 0.0, y })
            }
            Effect::SyncGalleryTrack(x) => {
                scrollable::scroll_to(GALLERY_TRACK_ID.clone(), AbsoluteOffset { x, y: 0.0 })
            }
            Effect::SubmitContact(form) => {
                let dir = PathBuf::from(&self.config.outbox_dir);
                Task::perform(
                    async move { save_submission(&dir, &form).map_err(|err| format!("{err:#}")) },
                    Message::ContactSaved,
                )
            }
            Effect::OpenLink(url) => Task::perform(
                async move { open_external(&url).map_err(|err| format!("{err:#}")) },
                Message::LinkOpened,
            ),
        }
    }

    fn save_config(&self) {
        let contents = match serialize_config(&self.config) {
            Ok(contents) => contents,
            Err(err) => {
                warn!("{err:?}");
                return;
            }
        };
        if let Some(parent) = self.config_path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        match fs::write(&self.config_path, contents) {
            Ok(()) => info!(path = %self.config_path.display(), "Saved config"),
            Err(err) => warn!(
                path = %self.config_path.display(),
                "Failed to save config: {err}"
            ),
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Escape),
            ..
        }) if status == event::Status::Ignored => Some(Message::EscapePressed),
        _ => None,
    }
}
