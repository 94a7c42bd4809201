// SPDX-License-Identifier: MPL-2.0
//! Filter modal card: sort mode, feed languages, transcript flag.
//!
//! Every control applies immediately; the "Apply" button and the backdrop
//! both just close the card. The language list renders a checkbox per
//! supported language, and unchecking the last one is rejected upstream
//! (see `ui::state::filters`), so the card never shows an empty selection.

use crate::app::Message;
use crate::domain::{Language, SortBy};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, checkbox, column, container, radio, text, Column};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub filters: &'a crate::ui::state::FilterState,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let filters = ctx.filters;

    let sort_section = column![
        text(i18n.tr("filter-sort-heading")).size(typography::BODY),
        radio(
            i18n.tr(SortBy::Exactness.i18n_key()),
            SortBy::Exactness,
            Some(filters.sort_by()),
            Message::SortSelected,
        ),
        radio(
            i18n.tr(SortBy::Popularity.i18n_key()),
            SortBy::Popularity,
            Some(filters.sort_by()),
            Message::SortSelected,
        ),
    ]
    .spacing(spacing::XS);

    let mut language_section: Column<'_, Message> = column![
        text(i18n.tr("filter-languages-heading")).size(typography::BODY)
    ]
    .spacing(spacing::XS);
    for language in Language::ALL {
        language_section = language_section.push(
            checkbox(
                i18n.tr(&language.i18n_key()),
                filters.languages().contains(&language),
            )
            .on_toggle(move |_| Message::LanguageToggled(language)),
        );
    }

    let transcript = checkbox(i18n.tr("filter-transcript"), filters.has_transcript())
        .on_toggle(|_| Message::TranscriptToggled);

    let apply = button(text(i18n.tr("filter-apply")).size(typography::BODY))
        .padding(spacing::XS)
        .style(styles::button::primary)
        .on_press(Message::FilterModalClosed);

    container(
        column![
            text(i18n.tr("filter-modal-title")).size(typography::TITLE_MD),
            sort_section,
            language_section,
            transcript,
            apply,
        ]
        .spacing(spacing::MD),
    )
    .width(Length::Fixed(sizing::MODAL_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::panel)
    .into()
}
