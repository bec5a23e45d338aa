mod layout;
mod messages;
mod state;
#[cfg(test)]
mod testing;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use iced::{Size, window};
use neuralchat_core::ContentRegistry;
use std::path::PathBuf;

/// Launch the site window with loaded config and content.
pub fn run_app(
    config: AppConfig,
    config_path: PathBuf,
    content: ContentRegistry,
) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        min_size: Some(Size::new(640.0, 480.0)),
        ..window::Settings::default()
    };
    let title = content.site().title.clone();

    iced::application(move |_: &App| title.clone(), App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| crate::theme::iced_theme(app.config.theme))
        .run_with(move || App::bootstrap(config, config_path, content))
}
