use tracing_subscriber::filter::EnvFilter;

use crate::config;

pub fn set_up(verbosity: u8) {
    let formatter = tracing_subscriber::fmt::format::debug_fn(|writer, field, value| {
        if field.name() == "message" {
            write!(writer, "{value:?}")
        } else {
            write!(writer, "{field}={value:?}")
        }
    });

    let level = max_level(verbosity);
    let filter = EnvFilter::new(format!(
        "warn,{}={level},roundup_lib={level}",
        config::BIN_NAME
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(true)
        .fmt_fields(formatter)
        .init();
}

fn max_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
