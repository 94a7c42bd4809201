// SPDX-License-Identifier: MPL-2.0
use iced::Size;
use podgrid::app::{App, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        catalog_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size(Size::new(App::INITIAL_WIDTH, App::INITIAL_HEIGHT))
        .run_with(move || App::new(flags))
}
