use std::sync::Once;

/// Logger configuration for vgdraw binaries.
///
/// `env_filter` follows the `env_logger` filter syntax. The engine logs color
/// and gradient fallbacks at `debug`/`warn`, image placeholders at `warn`, and
/// every rasterizer call made through `RecordingRasterizer` at `trace`, so
/// `"vgdraw_engine::raster=trace"` dumps the full call stream.
///
/// `write_style` controls ANSI coloring. `timestamps` prefixes each record with
/// a millisecond timestamp; turn it off when diffing call dumps.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            timestamps: true,
        }
    }
}

static INIT: Once = Once::new();

/// Installs the `env_logger` backend behind the engine's `log` calls.
///
/// Only the first call takes effect. Without an explicit filter, `RUST_LOG`
/// is honored, then `info`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.write_style(config.write_style);
        let precision = config.timestamps.then_some(env_logger::TimestampPrecision::Millis);
        builder.format_timestamp(precision);
        builder.init();

        log::debug!("vgdraw logging initialized");
    });
}