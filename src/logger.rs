// 📜 Logging setup
// Console output, [HH:MM:SS LEVEL] target - message

use log::LevelFilter;
use std::io::Write;

/// Initialise `env_logger`. `RUST_LOG` wins over the built-in defaults.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let mut builder = env_logger::Builder::new();

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    } else {
        builder.filter_level(LevelFilter::Info);
        builder.filter_module("hyper", LevelFilter::Warn);
        builder.filter_module("tower_http", LevelFilter::Warn);
    }

    builder.format(|buf, record| {
        let now = chrono::Local::now().format("%H:%M:%S");
        writeln!(
            buf,
            "[{} {}] {} - {}",
            now,
            record.level(),
            record.target(),
            record.args()
        )
    });

    if builder.try_init().is_ok() {
        log::debug!("logging initialised");
    }
}
