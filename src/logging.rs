// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tracing subscriber setup.

use crate::config::CarveConfig;
use tracing_subscriber::{fmt, EnvFilter};

/// Install a formatting subscriber.  `RUST_LOG` wins over the level in
/// `config`.  Calling this twice is harmless; the second call is a
/// no-op.
pub fn init_logging(config: &CarveConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}
