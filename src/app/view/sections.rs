use super::super::layout::{GALLERY_CARD_GAP, GALLERY_CARD_WIDTH, GALLERY_TRACK_PADDING};
use super::super::messages::{ContactField, Message};
use super::super::state::{App, GALLERY_TRACK_ID, ZoneKey};
use super::cube::{CubeView, facing_side};
use super::{card_style, heading, image_tile, spaced_title};
use crate::theme::{Palette, faded};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{
    Column, Row, Space, button, canvas, column, container, horizontal_space, mouse_area, row,
    scrollable, text, text_input,
};
use iced::{Element, Length, Padding, Theme};
use neuralchat_core::content::ImageRef;
use neuralchat_core::derive::MAX_BLUR;

/// Left lead of the parallax rows, so negative offsets stay on screen.
const STRIP_LEAD: f32 = 200.0;
/// Resting top inset of the footer title before its parallax lift.
const FOOTER_TITLE_INSET: f32 = 100.0;
const STRIP_TILE_WIDTH: f32 = 280.0;
const STRIP_TILE_HEIGHT: f32 = 180.0;

impl App {
    pub(super) fn hero_section(&self) -> Element<'_, Message> {
        let palette = self.palette();
        let hero = self.content.hero();
        let ctas = row![
            button(text(&hero.cta_primary)).on_press(Message::Navigate(hero.cta_primary_target)),
            button(text(&hero.cta_secondary))
                .style(button::secondary)
                .on_press(Message::Navigate(hero.cta_secondary_target)),
        ]
        .spacing(16);

        let corner = column![
            text(&hero.corner_label).size(12).color(palette.accent),
            text(&hero.corner_detail).size(12).color(palette.muted),
        ]
        .spacing(2);

        let body = column![
            text(&hero.brand_name).size(18).color(palette.muted),
            text(self.decode.display_text()).size(72),
            text(&hero.subtitle).size(20).color(palette.muted),
            ctas,
            Space::with_height(Length::Fill),
            corner,
        ]
        .spacing(20)
        .height(Length::Fill);

        container(body)
            .padding(64)
            .width(Length::Fill)
            .height(Length::Fixed(self.layout.viewport_height()))
            .into()
    }

    pub(super) fn stats_section(&self) -> Element<'_, Message> {
        let palette = self.palette();
        let stats = self.content.stats().stats.iter().map(|stat| {
            column![
                text(&stat.value).size(48).color(palette.accent),
                text(&stat.label).size(16).color(palette.muted),
            ]
            .spacing(6)
            .align_x(Horizontal::Center)
            .width(Length::Fill)
            .into()
        });
        container(Row::with_children(stats).spacing(24))
            .padding(64)
            .center_y(Length::Fill)
            .into()
    }

    pub(super) fn cube_section(&self) -> Element<'_, Message> {
        let palette = self.palette();
        let cube = self.content.album_cube();
        let state = self.zone_state(ZoneKey::AlbumCube);
        let sharpness = 1.0 - 0.6 * (state.smoothed_blur / MAX_BLUR).clamp(0.0, 1.0);

        let face = cube
            .cube_textures
            .get(facing_side(state.rotation_y))
            .map(|texture| texture.rsplit('/').next().unwrap_or(texture))
            .unwrap_or_default();

        let mut body = column![
            text(&cube.scroll_hint).size(14).color(palette.muted),
            canvas(CubeView {
                rotation_x: state.rotation_x,
                rotation_y: state.rotation_y,
                color: faded(palette.accent, sharpness),
            })
            .width(Length::Fill)
            .height(Length::FillPortion(3)),
            text(face).size(11).color(palette.muted),
        ]
        .spacing(16)
        .align_x(Horizontal::Center)
        .height(Length::Fill);

        if let Some(album) = cube.albums.get(state.active_index) {
            body = body
                .push(
                    text(spaced_title(&album.title, state.smoothed_spacing))
                        .size(44)
                        .color(faded(palette.text, sharpness)),
                )
                .push(text(&album.subtitle).size(16).color(palette.muted))
                .push(
                    text(format!(
                        "{:02} / {:02}",
                        state.active_index + 1,
                        cube.albums.len()
                    ))
                    .size(12)
                    .color(palette.muted),
                );
        }
        container(body).padding(32).into()
    }

    pub(super) fn features_section(&self) -> Element<'_, Message> {
        let palette = self.palette();
        let features = self.content.features();
        let mut grid = Column::new().spacing(24);
        for chunk in features.features.chunks(3) {
            let cards = chunk.iter().map(|feature| {
                container(
                    column![
                        text(&feature.icon).size(12).color(palette.accent),
                        text(&feature.title).size(22),
                        text(&feature.description).size(15).color(palette.muted),
                    ]
                    .spacing(10),
                )
                .padding(24)
                .width(Length::Fill)
                .style(move |_: &Theme| card_style(palette, false))
                .into()
            });
            grid = grid.push(Row::with_children(cards).spacing(24));
        }
        column![
            heading(&features.section_label, &features.section_title, palette),
            grid
        ]
        .spacing(40)
        .padding(64)
        .into()
    }

    pub(super) fn solutions_section(&self) -> Element<'_, Message> {
        let palette = self.palette();
        let solutions = self.content.solutions();
        let active = self.ui.active_solution;

        let list = solutions.solutions.iter().enumerate().map(|(idx, solution)| {
            let color = if idx == active {
                palette.text
            } else {
                palette.muted
            };
            mouse_area(
                container(text(&solution.title).size(26).color(color))
                    .padding([12, 0])
                    .width(Length::Fill),
            )
            .on_enter(Message::SolutionHovered(idx))
            .into()
        });

        let detail: Element<'_, Message> = match solutions.solutions.get(active) {
            Some(solution) => column![
                image_tile(&solution.title, 420.0, 240.0, palette),
                text(&solution.description).size(16),
                text(&solution.metrics).size(14).color(palette.accent),
                button(text("Learn more"))
                    .style(button::secondary)
                    .on_press(Message::SolutionLearnMore(active)),
            ]
            .spacing(16)
            .into(),
            None => Space::new(Length::Fill, Length::Shrink).into(),
        };

        column![
            heading(&solutions.section_label, &solutions.section_title, palette),
            row![
                Column::with_children(list).width(Length::FillPortion(1)),
                container(detail).width(Length::FillPortion(1)),
            ]
            .spacing(48),
        ]
        .spacing(40)
        .padding(64)
        .into()
    }

    pub(super) fn strips_section(&self) -> Element<'_, Message> {
        let palette = self.palette();
        let gallery = self.content.parallax_gallery();
        let top = self.zone_state(ZoneKey::TopRow).translate_x;
        let bottom = self.zone_state(ZoneKey::BottomRow).translate_x;
        let marquee = gallery.marquee_texts.join("  ·  ");

        column![
            container(heading(&gallery.section_label, &gallery.section_title, palette))
                .padding([0, 64]),
            strip(&gallery.parallax_images_top, top, palette),
            strip(&gallery.parallax_images_bottom, bottom, palette),
            container(text(marquee).size(18).color(palette.muted)).padding([0, 64]),
        ]
        .spacing(24)
        .padding([48, 0])
        .into()
    }

    pub(super) fn gallery_section(&self) -> Element<'_, Message> {
        let palette = self.palette();
        let gallery = self.content.parallax_gallery();
        let cards = gallery.gallery_images.iter().map(|image| {
            column![
                image_tile(&image.title, GALLERY_CARD_WIDTH, 300.0, palette),
                text(&image.title).size(20),
                text(&image.date).size(13).color(palette.muted),
            ]
            .spacing(8)
            .width(Length::Fixed(GALLERY_CARD_WIDTH))
            .into()
        });
        let track = scrollable(
            Row::with_children(cards)
                .spacing(GALLERY_CARD_GAP)
                .padding([0.0, GALLERY_TRACK_PADDING]),
        )
        .id(GALLERY_TRACK_ID.clone())
        .direction(Direction::Horizontal(
            Scrollbar::new().width(0).scroller_width(0),
        ))
        .width(Length::Fill);

        column![
            container(heading(&gallery.gallery_label, &gallery.gallery_title, palette))
                .padding([0, 64]),
            track,
            container(
                button(text(&gallery.end_cta_text))
                    .on_press(Message::Navigate(gallery.end_cta_target))
            )
            .padding([0, 64]),
        ]
        .spacing(32)
        .padding([48, 0])
        .height(Length::Fill)
        .into()
    }

    pub(super) fn pricing_section(&self) -> Element<'_, Message> {
        let palette = self.palette();
        let pricing = self.content.pricing();
        let cards = pricing.plans.iter().map(|plan| {
            let mut card = Column::new().spacing(12);
            if let Some(status) = plan.status {
                card = card.push(
                    text(pricing.status_labels.label(status))
                        .size(12)
                        .color(palette.highlight),
                );
            }
            card = card
                .push(text(&plan.name).size(20))
                .push(text(&plan.price).size(36).color(palette.accent))
                .push(text(&plan.period).size(13).color(palette.muted))
                .push(text(&plan.description).size(15));
            for feature in &plan.features {
                card = card.push(text(format!("+ {feature}")).size(14).color(palette.muted));
            }
            card = card.push(Space::with_height(Length::Fill)).push(
                button(text(&plan.cta))
                    .width(Length::Fill)
                    .on_press(Message::PlanSelected(plan.id)),
            );
            let highlighted = plan.highlighted;
            container(card)
                .padding(24)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(move |_: &Theme| card_style(palette, highlighted))
                .into()
        });

        column![
            heading(&pricing.section_label, &pricing.section_title, palette),
            Row::with_children(cards).spacing(20).height(Length::Fixed(820.0)),
            row![
                text(&pricing.bottom_note).size(15).color(palette.muted),
                horizontal_space(),
                button(text(&pricing.bottom_cta_text))
                    .style(button::secondary)
                    .on_press(Message::Navigate(pricing.bottom_cta_target)),
            ]
            .align_y(Vertical::Center),
        ]
        .spacing(40)
        .padding(64)
        .into()
    }

    pub(super) fn testimonials_section(&self) -> Element<'_, Message> {
        let palette = self.palette();
        let testimonials = self.content.testimonials();
        let carousel = &self.ui.carousel;

        let current: Element<'_, Message> = match testimonials.testimonials.get(carousel.index()) {
            Some(item) => column![
                text(format!("\u{201c}{}\u{201d}", item.quote)).size(26),
                text(&item.author).size(18).color(palette.accent),
                text(format!("{}, {}", item.role, item.company))
                    .size(14)
                    .color(palette.muted),
            ]
            .spacing(14)
            .into(),
            None => Space::new(Length::Fill, Length::Shrink).into(),
        };

        let dots = (0..carousel.len()).map(|idx| {
            let style: fn(&Theme, button::Status) -> button::Style = if idx == carousel.index() {
                button::primary
            } else {
                button::secondary
            };
            button(text(format!("{}", idx + 1)).size(12))
                .style(style)
                .on_press(Message::TestimonialSelected(idx))
                .into()
        });

        column![
            heading(&testimonials.section_label, &testimonials.section_title, palette),
            container(current)
                .padding(32)
                .width(Length::Fill)
                .style(move |_: &Theme| card_style(palette, false)),
            row![
                button("Previous").on_press(Message::TestimonialPrev),
                Row::with_children(dots).spacing(8),
                button("Next").on_press(Message::TestimonialNext),
            ]
            .spacing(16)
            .align_y(Vertical::Center),
        ]
        .spacing(32)
        .padding(64)
        .into()
    }

    pub(super) fn contact_section(&self) -> Element<'_, Message> {
        let palette = self.palette();
        let contact = self.content.contact();
        let state = &self.ui.contact;
        let field = |placeholder: &'static str, value: &'_ str, which: ContactField| {
            text_input(placeholder, value)
                .on_input(move |value| Message::ContactFieldChanged(which, value))
                .padding(10)
        };

        let submit_label = if state.submitting {
            &contact.sending_label
        } else {
            &contact.submit_label
        };
        let mut form = column![
            field("Name", &state.form.name, ContactField::Name),
            field("Email", &state.form.email, ContactField::Email),
            field("Phone (optional)", &state.form.phone, ContactField::Phone),
            field("Message", &state.form.message, ContactField::Message)
                .on_submit(Message::SubmitContact),
        ]
        .spacing(14)
        .width(Length::FillPortion(3));
        if let Some(error) = &state.error {
            form = form.push(text(error).color(iced::Color::from_rgb(0.95, 0.3, 0.35)));
        }
        form = form.push(
            button(text(submit_label)).on_press_maybe((!state.submitting).then_some(Message::SubmitContact)),
        );

        let side = container(
            column![
                text(&contact.side_title).size(22),
                text(&contact.side_text).size(15).color(palette.muted),
            ]
            .spacing(12),
        )
        .padding(24)
        .width(Length::FillPortion(2))
        .style(move |_: &Theme| card_style(palette, false));

        column![
            heading(&contact.section_label, &contact.section_title, palette),
            text(&contact.intro).size(16).color(palette.muted),
            row![form, side].spacing(40),
        ]
        .spacing(28)
        .padding(64)
        .into()
    }

    pub(super) fn footer_section(&self) -> Element<'_, Message> {
        let palette = self.palette();
        let footer = self.content.footer();
        let lift = self.zone_state(ZoneKey::Footer).translate_y;

        let title = container(
            column![
                text(&footer.hero_title).size(88),
                text(&footer.hero_subtitle).size(18).color(palette.muted),
            ]
            .spacing(8),
        )
        .padding(Padding::ZERO.top((FOOTER_TITLE_INSET + lift).max(0.0)));

        let artist = column![
            image_tile(&footer.portrait_alt, 220.0, 260.0, palette),
            text(&footer.artist_label).size(12).color(palette.accent),
            text(&footer.artist_name).size(20),
            text(&footer.artist_subtitle).size(13).color(palette.muted),
        ]
        .spacing(6);

        let quick_links = footer.quick_links.iter().map(|label| {
            button(text(label).size(14))
                .style(button::text)
                .on_press(Message::QuickLinkSelected(label.clone()))
                .into()
        });

        let newsletter = &self.ui.newsletter;
        let mut subscribe = column![
            text(&footer.newsletter_title).size(18),
            text(&footer.newsletter_description).size(13).color(palette.muted),
            row![
                text_input("you@company.com", &newsletter.email)
                    .on_input(Message::NewsletterEmailChanged)
                    .on_submit(Message::SubscribeNewsletter)
                    .padding(8),
                button(text(&footer.newsletter_button_text)).on_press(Message::SubscribeNewsletter),
            ]
            .spacing(8),
        ]
        .spacing(8);
        if let Some(error) = &newsletter.error {
            subscribe = subscribe.push(
                text(error)
                    .size(13)
                    .color(iced::Color::from_rgb(0.95, 0.3, 0.35)),
            );
        }

        let contact_info = column![
            text(&footer.contact_title).size(18),
            button(text(format!("{}: {}", footer.email_label, footer.email)).size(14))
                .style(button::text)
                .on_press(Message::OpenLink(format!("mailto:{}", footer.email))),
            text(format!("{}: {}", footer.phone_label, footer.phone)).size(14),
            text(format!("{}: {}", footer.address_label, footer.address)).size(14),
        ]
        .spacing(6);

        let socials = footer.social_links.iter().map(|link| {
            button(text(&link.label).size(13))
                .style(button::secondary)
                .on_press(Message::OpenLink(link.href.clone()))
                .into()
        });
        let bottom_links = footer
            .bottom_links
            .iter()
            .map(|label| text(label).size(12).color(palette.muted).into());

        column![
            title,
            row![
                artist,
                column![
                    text(&footer.brand_name).size(22).color(palette.accent),
                    text(&footer.brand_description).size(14).color(palette.muted),
                    Row::with_children(socials).spacing(8),
                ]
                .spacing(10)
                .width(Length::FillPortion(2)),
                column![
                    text(&footer.quick_links_title).size(18),
                    Column::with_children(quick_links).spacing(2),
                ]
                .spacing(6)
                .width(Length::FillPortion(1)),
                contact_info.width(Length::FillPortion(2)),
                subscribe.width(Length::FillPortion(2)),
            ]
            .spacing(32),
            row![
                text(&footer.copyright_text).size(12).color(palette.muted),
                horizontal_space(),
                Row::with_children(bottom_links).spacing(16),
            ],
        ]
        .spacing(40)
        .padding(64)
        .into()
    }
}

/// One parallax row, shifted by its zone's horizontal translation.
fn strip(images: &[ImageRef], translate_x: f32, palette: Palette) -> Element<'_, Message> {
    let tiles = images
        .iter()
        .map(|image| image_tile(&image.alt, STRIP_TILE_WIDTH, STRIP_TILE_HEIGHT, palette));
    container(Row::with_children(tiles).spacing(16))
        .padding(Padding::ZERO.left((STRIP_LEAD + translate_x).max(0.0)))
        .width(Length::Fill)
        .clip(true)
        .into()
}
