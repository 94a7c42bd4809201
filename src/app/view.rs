// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the current screen from application state. The results area
//! shows exactly one feed: the search feed while a committed query is
//! active, the category-browse feed otherwise. Each feed maps its phase to
//! skeleton, error, empty, or content; the filter modal stacks on top of
//! whatever is underneath.

use super::feed::Phase;
use super::{App, Message, Screen};
use crate::ui::browse::{
    carousel, category_tabs, detail, empty_state, error_state, filter_modal, results_grid,
    search_bar, skeleton,
};
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::widget::{center, column, mouse_area, opaque, scrollable, stack, Column};
use iced::{Element, Length, Padding};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let screen: Element<'_, Message> = match &self.screen {
            Screen::Browse => self.view_browse(),
            Screen::Detail(podcast) => detail::view(detail::ViewContext {
                i18n: &self.i18n,
                podcast,
                artwork: &self.artwork,
            }),
        };

        if self.filter_modal_open {
            let card = filter_modal::view(filter_modal::ViewContext {
                i18n: &self.i18n,
                filters: &self.filters,
            });
            stack![
                screen,
                opaque(
                    mouse_area(
                        center(opaque(card)).style(styles::container::backdrop)
                    )
                    .on_press(Message::FilterModalClosed)
                ),
            ]
            .into()
        } else {
            screen
        }
    }

    fn view_browse(&self) -> Element<'_, Message> {
        let results: Element<'_, Message> = if self.search.is_active() {
            self.view_search_results()
        } else {
            self.view_category_sections()
        };

        column![
            search_bar::view(search_bar::ViewContext {
                i18n: &self.i18n,
                query: self.search.raw(),
                search_active: self.search.is_active(),
                filters: &self.filters,
            }),
            category_tabs::view(self.category, &self.i18n),
            results,
        ]
        .spacing(spacing::SM)
        .padding(Padding::ZERO.top(spacing::MD))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn view_search_results(&self) -> Element<'_, Message> {
        match self.results.phase() {
            Phase::Idle | Phase::Loading { .. } => {
                skeleton::results_grid(self.viewport_width, self.pulse_opacity(self.results.phase()))
            }
            Phase::Failed => error_state::view(&self.i18n),
            Phase::Ready(items) if items.is_empty() => {
                empty_state::view(empty_state::Kind::Search, &self.i18n)
            }
            Phase::Ready(items) => results_grid::view(items, &self.artwork, self.viewport_width),
        }
    }

    fn view_category_sections(&self) -> Element<'_, Message> {
        match self.browse.phase() {
            Phase::Idle | Phase::Loading { .. } => {
                let opacity = self.pulse_opacity(self.browse.phase());
                let mut rows = Column::new().spacing(spacing::LG);
                for _ in 0..SKELETON_SECTIONS {
                    rows = rows.push(skeleton::carousel_row(opacity));
                }
                rows.into()
            }
            Phase::Failed => error_state::view(&self.i18n),
            Phase::Ready(sections) if sections.iter().all(|s| s.items.is_empty()) => {
                empty_state::view(empty_state::Kind::Browse, &self.i18n)
            }
            Phase::Ready(sections) => {
                let mut feed = Column::new().spacing(spacing::LG).width(Length::Fill);
                for section in sections.iter().filter(|s| !s.items.is_empty()) {
                    feed = feed.push(carousel::view(section, &self.artwork, &self.i18n));
                }
                scrollable(feed).width(Length::Fill).height(Length::Fill).into()
            }
        }
    }

    /// Samples the loading pulse at the animation clock; placeholders
    /// rendered outside a loading phase sit at the wave's floor.
    fn pulse_opacity<T>(&self, phase: &Phase<T>) -> f32 {
        match phase {
            Phase::Loading { pulse } => pulse.opacity(self.now),
            _ => crate::ui::state::pulse::MIN_OPACITY,
        }
    }
}

/// Carousel-row skeletons stacked while the browse feed loads.
const SKELETON_SECTIONS: usize = 3;
