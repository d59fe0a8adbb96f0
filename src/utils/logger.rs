use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 預設過濾規則；stdout 留給翻譯結果，所以非 verbose 時只顯示警告
pub fn default_filter(verbose: bool, level: Option<&str>) -> String {
    match (verbose, level) {
        (true, _) => "morse_translator=debug,info".to_string(),
        (false, Some(level)) => format!("morse_translator={}", level),
        (false, None) => "morse_translator=warn".to_string(),
    }
}

pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
