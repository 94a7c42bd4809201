// SPDX-License-Identifier: MPL-2.0
//! Horizontally scrolling row of category tabs, "All" first.

use crate::app::Message;
use crate::domain::Category;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, row, scrollable, text, Row};
use iced::{Element, Length, Padding};

pub fn view<'a>(selected: Category, i18n: &I18n) -> Element<'a, Message> {
    let mut tabs: Row<'a, Message> = row![].spacing(spacing::XS);
    for category in Category::ALL {
        tabs = tabs.push(
            button(text(i18n.tr(&category.i18n_key())).size(typography::BODY))
                .padding(Padding::new(spacing::XS).left(spacing::SM).right(spacing::SM))
                .style(styles::button::tab(category == selected))
                .on_press(Message::CategorySelected(category)),
        );
    }

    scrollable(container(tabs).padding(Padding::ZERO.left(spacing::MD).right(spacing::MD)))
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(0).scroller_width(0),
        ))
        .width(Length::Fill)
        .into()
}
