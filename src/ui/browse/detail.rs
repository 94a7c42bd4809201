// SPDX-License-Identifier: MPL-2.0
//! Per-podcast detail screen: large artwork, title, author, back action.

use crate::app::Message;
use crate::data::ArtworkCache;
use crate::domain::PodcastSummary;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::{icons, styles};
use iced::widget::{button, column, container, image, row, text};
use iced::{Alignment, Color, ContentFit, Element, Length, Padding};

const ARTWORK_SIDE: f32 = 220.0;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub podcast: &'a PodcastSummary,
    pub artwork: &'a ArtworkCache,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let back = button(
        row![
            icons::glyph(icons::arrow_left(), palette::GRAY_700),
            text(ctx.i18n.tr("detail-back")).size(typography::BODY),
        ]
        .spacing(spacing::XXS)
        .align_y(Alignment::Center),
    )
    .padding(spacing::XXS)
    .style(styles::button::icon)
    .on_press(Message::DetailClosed);

    let cover: Element<'_, Message> = match ctx.artwork.get(&ctx.podcast.image_url) {
        Some(handle) => image(handle)
            .width(Length::Fixed(ARTWORK_SIDE))
            .height(Length::Fixed(ARTWORK_SIDE))
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(text(""))
            .center_x(Length::Fixed(ARTWORK_SIDE))
            .center_y(Length::Fixed(ARTWORK_SIDE))
            .style(styles::container::tile_placeholder)
            .into(),
    };

    let body = column![
        cover,
        text(ctx.podcast.title.as_str()).size(typography::TITLE_LG),
        text(ctx.podcast.author.as_str())
            .size(typography::BODY)
            .color(Color {
                a: opacity::TEXT_MUTED,
                ..palette::GRAY_900
            }),
    ]
    .spacing(spacing::SM)
    .align_x(Alignment::Center);

    column![
        container(back).padding(Padding::new(spacing::MD)),
        container(body).center_x(Length::Fill).center_y(Length::Fill),
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
