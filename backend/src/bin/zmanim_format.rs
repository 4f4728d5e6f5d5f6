//! Command-line duration formatter.
//!
//! Formats each millisecond argument in the configured time format and as an
//! XSD duration.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin zmanim-format -- 5400000 -90000 0
//!
//! # With a formatter config file
//! ZMANIM_FORMAT_CONFIG=zmanim.toml cargo run --bin zmanim-format -- 5400000
//! ```
//!
//! # Environment Variables
//!
//! - `ZMANIM_FORMAT_CONFIG`: Path to a TOML formatter config (default: built-in defaults)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use zmanim_json::config::FormatterConfig;
use zmanim_json::ZmanimFormatter;

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = match env::var("ZMANIM_FORMAT_CONFIG") {
        Ok(path) => {
            info!("Loading formatter config from {}", path);
            FormatterConfig::from_file(&path)?
        }
        Err(_) => FormatterConfig::default(),
    };
    let formatter = config.into_formatter()?;
    debug!(
        "Formatter: mode={} zone={}",
        formatter.time_format(),
        formatter.time_zone()
    );

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        anyhow::bail!("usage: zmanim-format <millis>...");
    }

    for arg in args {
        let millis: f64 = arg
            .parse()
            .map_err(|_| anyhow::anyhow!("'{}' is not a millisecond value", arg))?;
        println!(
            "{}\t{}\t{}",
            arg,
            formatter.format(millis),
            ZmanimFormatter::format_xsd_duration_time(millis)
        );
    }

    Ok(())
}
