//! Debug logging
//!
//! The terminal UI owns stdout and stderr, so debug builds log to a file in
//! the temp directory instead. Release builds install no logger and every
//! `log` macro is a no-op.

pub const LOG_FILE: &str = "calcterm-debug.log";

#[cfg(debug_assertions)]
pub fn init() {
    use std::fs::File;
    use std::io::Write;

    let path = std::env::temp_dir().join(LOG_FILE);
    let Ok(file) = File::create(&path) else {
        return;
    };

    let result = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{:<5}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();

    if result.is_ok() {
        log::info!("logging to {}", path.display());
    }
}

#[cfg(not(debug_assertions))]
pub fn init() {}
