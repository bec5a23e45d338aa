use super::super::super::messages::Message;
use super::super::super::state::{App, StatusLine};
use super::super::Effect;
use crate::config::ThemeMode;
use neuralchat_core::SectionName;
use neuralchat_core::actions::{quick_link_notice, solution_notice};
use tracing::{debug, info, warn};

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::Scrolled {
                offset_y,
                viewport_width,
                viewport_height,
            } => self.handle_scrolled(offset_y, viewport_width, viewport_height, &mut effects),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height, &mut effects);
            }
            Message::Frame(now) => self.handle_frame(now, &mut effects),
            Message::DecodeTick(_) => self.handle_decode_tick(),
            Message::EscapePressed => self.handle_close_dialog(),
            Message::Navigate(section) => self.handle_navigate(section, &mut effects),
            Message::ToggleTheme => self.handle_toggle_theme(&mut effects),
            Message::PlanSelected(plan_id) => self.handle_plan_selected(plan_id, &mut effects),
            Message::PaymentChoiceSelected(choice) => {
                self.handle_payment_choice(choice, &mut effects);
            }
            Message::CloseDialog => self.handle_close_dialog(),
            Message::InvoiceFieldChanged(field, value) => {
                self.handle_invoice_field_changed(field, value);
            }
            Message::SubmitInvoice => self.handle_submit_invoice(&mut effects),
            Message::ContactFieldChanged(field, value) => {
                self.handle_contact_field_changed(field, value);
            }
            Message::SubmitContact => self.handle_submit_contact(&mut effects),
            Message::ContactSaved(result) => self.handle_contact_saved(result),
            Message::NewsletterEmailChanged(email) => {
                self.ui.newsletter.email = email;
                self.ui.newsletter.error = None;
            }
            Message::SubscribeNewsletter => self.handle_subscribe_newsletter(),
            Message::SolutionHovered(idx) => {
                if idx < self.content.solutions().solutions.len() {
                    self.ui.active_solution = idx;
                }
            }
            Message::SolutionLearnMore(idx) => self.handle_solution_learn_more(idx),
            Message::QuickLinkSelected(label) => self.handle_quick_link(&label, &mut effects),
            Message::TestimonialNext => {
                self.ui.carousel.next();
            }
            Message::TestimonialPrev => {
                self.ui.carousel.prev();
            }
            Message::TestimonialSelected(idx) => {
                self.ui.carousel.select(idx);
            }
            Message::OpenLink(url) => effects.push(Effect::OpenLink(url)),
            Message::LinkOpened(result) => self.handle_link_opened(result),
            Message::DismissStatus => self.ui.status = None,
        }

        effects
    }

    fn handle_decode_tick(&mut self) {
        let running = self.decode.tick(&mut self.rng);
        if !running {
            debug!(text = self.decode.display_text(), "Headline decoded");
        }
    }

    fn handle_toggle_theme(&mut self, effects: &mut Vec<Effect>) {
        self.config.theme = match self.config.theme {
            ThemeMode::Night => ThemeMode::Day,
            ThemeMode::Day => ThemeMode::Night,
        };
        info!(theme = %self.config.theme, "Toggled theme");
        effects.push(Effect::SaveConfig);
    }

    fn handle_solution_learn_more(&mut self, idx: usize) {
        if let Some(solution) = self.content.solutions().solutions.get(idx) {
            self.ui.status = Some(StatusLine::info(solution_notice(&solution.title)));
        }
    }

    /// Quick links naming a section scroll to it; the rest get a notice.
    fn handle_quick_link(&mut self, label: &str, effects: &mut Vec<Effect>) {
        match label.trim().to_lowercase().parse::<SectionName>() {
            Ok(section) => self.handle_navigate(section, effects),
            Err(_) => {
                debug!(%label, "Quick link has no section");
                self.ui.status = Some(StatusLine::info(quick_link_notice(label)));
            }
        }
    }

    fn handle_link_opened(&mut self, result: Result<(), String>) {
        if let Err(err) = result {
            warn!("Failed to open link: {err}");
            self.ui.status = Some(StatusLine::error(format!("Could not open link: {err}")));
        }
    }
}
