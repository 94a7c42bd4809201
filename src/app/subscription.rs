// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Beyond window resize tracking there are two timer subscriptions, both
//! gated on state so the app is fully idle when nothing is pending:
//! a debounce poll that runs only while a query edit is waiting to commit,
//! and a redraw tick that runs only while a skeleton is on screen.

use super::{App, Message};
use iced::{event, time, window, Event, Subscription};
use std::time::Duration;

/// How often the gated timers fire. Fine enough that the debounce commit
/// lands within ~10% of its 500ms deadline and the skeleton pulse stays
/// smooth, without a per-frame wakeup.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

impl App {
    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![event::listen_with(|event, _status, _window_id| {
            if let Event::Window(window::Event::Resized(size)) = event {
                Some(Message::WindowResized(size))
            } else {
                None
            }
        })];

        if self.search.is_debouncing() {
            subscriptions.push(time::every(TICK_INTERVAL).map(Message::DebounceTick));
        }

        if self.skeleton_visible() {
            subscriptions.push(time::every(TICK_INTERVAL).map(Message::PulseTick));
        }

        Subscription::batch(subscriptions)
    }
}
