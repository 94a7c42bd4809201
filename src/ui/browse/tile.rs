// SPDX-License-Identifier: MPL-2.0
//! A single podcast tile: square artwork above title and author.
//!
//! The whole tile is one invisible button that navigates to the podcast's
//! detail screen. Until the artwork has been fetched (or when fetching
//! failed) a neutral placeholder with the podcast's initial stands in, at
//! the same size, so nothing shifts when the image arrives.

use crate::app::Message;
use crate::data::ArtworkCache;
use crate::domain::PodcastSummary;
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, image, text, Column};
use iced::{Color, ContentFit, Element, Length};

pub fn view<'a>(
    summary: &'a PodcastSummary,
    artwork: &ArtworkCache,
    side: f32,
) -> Element<'a, Message> {
    let cover: Element<'a, Message> = match artwork.get(&summary.image_url) {
        Some(handle) => image(handle)
            .width(Length::Fixed(side))
            .height(Length::Fixed(side))
            .content_fit(ContentFit::Cover)
            .into(),
        None => placeholder(&summary.title, side),
    };

    let labels: Column<'a, Message> = column![
        text(summary.title.as_str()).size(typography::BODY_SM),
        text(summary.author.as_str())
            .size(typography::CAPTION)
            .color(Color {
                a: opacity::TEXT_MUTED,
                ..palette::GRAY_900
            }),
    ]
    .spacing(spacing::XXS);

    button(
        column![cover, labels]
            .spacing(spacing::XXS)
            .width(Length::Fixed(side)),
    )
    .padding(0)
    .style(styles::button::tile)
    .on_press(Message::PodcastOpened(summary.clone()))
    .into()
}

/// Neutral square carrying the first character of the title.
fn placeholder<'a>(title: &str, side: f32) -> Element<'a, Message> {
    let initial: String = title.chars().take(1).collect();
    container(text(initial).size(typography::TITLE_MD))
        .center_x(Length::Fixed(side))
        .center_y(Length::Fixed(side))
        .style(styles::container::tile_placeholder)
        .into()
}
