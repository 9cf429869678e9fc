pub fn setup_logging() {
    let rust_log = std::env::var("RUST_LOG").ok();
    logging_builder(rust_log.as_deref()).init();
}

fn logging_builder(rust_log: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, log::LevelFilter::Info)
        .format_timestamp(None);

    if let Some(rust_log) = rust_log {
        builder.parse_filters(rust_log);
    }

    builder
}
