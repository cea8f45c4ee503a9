// Copyright 2026 the reflabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stdout logging for the demo.

use crate::Error;

/// Installs a stdout logger. `RUST_LOG` picks the level for the reflabel
/// crates (default `debug`).
pub(crate) fn setup() -> Result<(), Error> {
    let level_filter = std::env::var("RUST_LOG")
        .ok()
        .as_deref()
        .map(str::parse::<log::Level>)
        .transpose()?
        .unwrap_or(log::Level::Debug)
        .to_level_filter();

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}:{} -- {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                message
            ));
        })
        .level(log::LevelFilter::Off)
        .level_for("reflabel", level_filter)
        .level_for("reflabel_demo", level_filter)
        .chain(std::io::stdout())
        .apply()?;

    Ok(())
}
