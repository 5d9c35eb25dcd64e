use iced_banner::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
        icon: args.opt_value_from_str("--icon").unwrap(),
        title: args.opt_value_from_str("--title").unwrap(),
        message: args.opt_value_from_str("--message").unwrap(),
        duration_ms: args.opt_value_from_str("--duration").unwrap(),
    };

    app::run(flags)
}
