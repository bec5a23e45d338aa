//! View layer: a fixed navigation bar over one scrollable page whose blocks
//! have the heights `PageLayout` computed. Pinned blocks hold their content in
//! place by offsetting it inside a spacer as tall as the pinned distance.

mod cube;
mod sections;

use super::layout::{Block, BlockLayout};
use super::messages::{InvoiceField, Message};
use super::state::{App, NAV_BAR_HEIGHT, PAGE_SCROLL_ID, PaymentDialogState, ZoneKey};
use crate::theme::{Palette, faded, palette};
use iced::alignment::Vertical;
use iced::widget::{
    Column, Space, button, column, container, horizontal_space, opaque, row, scrollable, stack,
    text, text_input,
};
use iced::{Background, Border, Color, Element, Length, Theme};
use neuralchat_core::actions::PaymentChoice;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let palette = self.palette();
        let page = scrollable(
            Column::with_children(self.layout.blocks().iter().map(|block| self.block_view(block)))
                .width(Length::Fill),
        )
        .id(PAGE_SCROLL_ID.clone())
        .on_scroll(|viewport| Message::Scrolled {
            offset_y: viewport.absolute_offset().y,
            viewport_width: viewport.bounds().width,
            viewport_height: viewport.bounds().height,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let base: Element<'_, Message> = container(column![self.nav_bar(), page])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_: &Theme| container::Style {
                background: Some(Background::Color(palette.background)),
                text_color: Some(palette.text),
                ..container::Style::default()
            })
            .into();

        match &self.ui.payment {
            Some(payment) => stack![base, opaque(self.payment_overlay(payment))].into(),
            None => base,
        }
    }

    pub(super) fn palette(&self) -> Palette {
        palette(self.config.theme)
    }

    fn nav_bar(&self) -> Element<'_, Message> {
        let palette = self.palette();
        let hero = self.content.hero();
        let mut items = row![text(&hero.brand_name).size(20).color(palette.accent)]
            .spacing(8)
            .align_y(Vertical::Center);
        items = items.push(horizontal_space());

        if let Some(status) = &self.ui.status {
            let color = if status.is_error {
                Color::from_rgb(0.95, 0.3, 0.35)
            } else {
                palette.muted
            };
            items = items
                .push(text(&status.text).size(14).color(color))
                .push(button("x").style(button::text).on_press(Message::DismissStatus));
        }

        for item in &hero.nav_items {
            items = items.push(
                button(text(&item.label).size(14))
                    .style(button::text)
                    .on_press(Message::Navigate(item.section)),
            );
        }
        let theme_label = if matches!(self.config.theme, crate::config::ThemeMode::Night) {
            "Day Mode"
        } else {
            "Night Mode"
        };
        items = items.push(button(text(theme_label).size(14)).on_press(Message::ToggleTheme));

        container(items)
            .padding([0, 24])
            .height(Length::Fixed(NAV_BAR_HEIGHT))
            .width(Length::Fill)
            .align_y(Vertical::Center)
            .style(move |_: &Theme| container::Style {
                background: Some(Background::Color(palette.surface)),
                ..container::Style::default()
            })
            .into()
    }

    fn block_view(&self, block: &BlockLayout) -> Element<'_, Message> {
        let viewport = self.layout.viewport_height();
        let content: Element<'_, Message> = match block.block {
            Block::Hero => self.hero_section(),
            Block::Stats => self.revealed(ZoneKey::Stats, || self.stats_section()),
            Block::AlbumCube => self.pinned(ZoneKey::AlbumCube, viewport, self.cube_section()),
            Block::Features => self.revealed(ZoneKey::Features, || self.features_section()),
            Block::Solutions => self.revealed(ZoneKey::Solutions, || self.solutions_section()),
            Block::ParallaxStrips => self.strips_section(),
            Block::Gallery => self.pinned(ZoneKey::Gallery, viewport, self.gallery_section()),
            Block::Pricing => self.revealed(ZoneKey::Pricing, || self.pricing_section()),
            Block::Testimonials => {
                self.revealed(ZoneKey::Testimonials, || self.testimonials_section())
            }
            Block::Contact => self.revealed(ZoneKey::Contact, || self.contact_section()),
            Block::Footer => self.footer_section(),
        };
        container(content)
            .width(Length::Fill)
            .height(Length::Fixed(block.total_height()))
            .clip(true)
            .into()
    }

    /// Sections stay blank until their reveal zone first activates.
    fn revealed<'a>(
        &'a self,
        key: ZoneKey,
        build: impl FnOnce() -> Element<'a, Message>,
    ) -> Element<'a, Message> {
        if self.zone_state(key).revealed {
            build()
        } else {
            Space::new(Length::Fill, Length::Fill).into()
        }
    }

    fn pinned<'a>(
        &'a self,
        key: ZoneKey,
        viewport: f32,
        content: Element<'a, Message>,
    ) -> Element<'a, Message> {
        column![
            Space::with_height(Length::Fixed(self.pin_offset(key))),
            container(content)
                .width(Length::Fill)
                .height(Length::Fixed(viewport)),
        ]
        .into()
    }

    fn payment_overlay<'a>(&'a self, payment: &'a PaymentDialogState) -> Element<'a, Message> {
        let palette = self.palette();
        let dialog = &payment.dialog;
        let mut body = column![
            text(format!("Purchase {}", dialog.plan_name)).size(24),
            text(format!("{} {}", dialog.price, dialog.period))
                .size(16)
                .color(palette.muted),
        ]
        .spacing(12);

        match &payment.invoice {
            None => {
                let choices = PaymentChoice::ALL.into_iter().map(|choice| {
                    button(text(choice.label()))
                        .on_press(Message::PaymentChoiceSelected(choice))
                        .into()
                });
                body = body.push(row(choices).spacing(12));
            }
            Some(invoice) => {
                let field = |placeholder: &'static str, value: &'a str, which: InvoiceField| {
                    text_input(placeholder, value)
                        .on_input(move |value| Message::InvoiceFieldChanged(which, value))
                        .on_submit(Message::SubmitInvoice)
                        .padding(8)
                };
                body = body
                    .push(field("Company", &invoice.company, InvoiceField::Company))
                    .push(field("Contact name", &invoice.contact_name, InvoiceField::ContactName))
                    .push(field("Email", &invoice.email, InvoiceField::Email))
                    .push(field("VAT number (optional)", &invoice.vat_number, InvoiceField::VatNumber))
                    .push(button("Request invoice").on_press(Message::SubmitInvoice));
            }
        }
        if let Some(error) = &payment.error {
            body = body.push(text(error).color(Color::from_rgb(0.95, 0.3, 0.35)));
        }
        body = body.push(
            button("Cancel")
                .style(button::secondary)
                .on_press(Message::CloseDialog),
        );

        let card = container(body)
            .padding(28)
            .width(Length::Fixed(460.0))
            .style(move |_: &Theme| card_style(palette, true));

        container(card)
            .center(Length::Fill)
            .style(move |_: &Theme| container::Style {
                background: Some(Background::Color(faded(Color::BLACK, 0.7))),
                ..container::Style::default()
            })
            .into()
    }
}

pub(super) fn card_style(palette: Palette, highlighted: bool) -> container::Style {
    let border_color = if highlighted {
        palette.accent
    } else {
        faded(palette.muted, 0.3)
    };
    container::Style {
        background: Some(Background::Color(palette.surface)),
        text_color: Some(palette.text),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

/// Section label and title pair shared by most blocks.
pub(super) fn heading<'a>(label: &'a str, title: &'a str, palette: Palette) -> Element<'a, Message> {
    column![
        text(label).size(14).color(palette.accent),
        text(title).size(40),
    ]
    .spacing(6)
    .into()
}

/// Stand-in for a photo: a tinted tile captioned with the image's alt text.
pub(super) fn image_tile<'a>(
    caption: &'a str,
    width: f32,
    height: f32,
    palette: Palette,
) -> Element<'a, Message> {
    container(text(caption).size(14).color(palette.muted))
        .padding(12)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .align_y(Vertical::Bottom)
        .style(move |_: &Theme| container::Style {
            background: Some(Background::Color(faded(palette.highlight, 0.18))),
            border: Border {
                radius: 10.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

/// Widen a title by padding between glyphs; `spacing` is in pixels.
pub(super) fn spaced_title(title: &str, spacing: f32) -> String {
    let gaps = (spacing / 10.0).round().clamp(0.0, 3.0) as usize;
    if gaps == 0 {
        return title.to_string();
    }
    let gap = " ".repeat(gaps);
    let mut out = String::with_capacity(title.len() * (gaps + 1));
    for (idx, ch) in title.chars().enumerate() {
        if idx > 0 {
            out.push_str(&gap);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_title_grows_with_spacing() {
        assert_eq!(spaced_title("ABC", 0.0), "ABC");
        assert_eq!(spaced_title("ABC", 10.0), "A B C");
        assert_eq!(spaced_title("AB", 30.0), "A   B");
        assert_eq!(spaced_title("AB", 500.0), "A   B");
    }

    #[test]
    fn unrevealed_sections_render_without_panicking() {
        let app = crate::app::testing::build_test_app(true);
        let _ = app.view();
    }
}
