mod reducer;
mod runtime;

use super::super::messages::Message;
use super::super::state::App;
use iced::event;
use iced::time;
use iced::{Subscription, Task};
use std::time::Duration;

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> =
            vec![event::listen_with(runtime::runtime_event_to_message)];

        if app.decode.is_decoding() {
            subscriptions.push(
                time::every(Duration::from_millis(app.config.decode_tick_ms))
                    .map(Message::DecodeTick),
            );
        }
        if app.needs_frames() {
            subscriptions.push(
                time::every(Duration::from_millis(app.config.frame_interval_ms))
                    .map(Message::Frame),
            );
        }

        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }
}
