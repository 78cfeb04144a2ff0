// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Session configuration.

/// Settings a carving session is created with.
#[derive(Debug, Clone, PartialEq)]
pub struct CarveConfig {
    /// Seams queued by a removal request that does not name a count.
    pub seams_per_request: u32,

    /// Log level filter handed to the subscriber when `RUST_LOG` is
    /// unset (e.g. "info", "seamshrink=debug").
    pub log_level: String,
}

impl Default for CarveConfig {
    fn default() -> Self {
        CarveConfig {
            seams_per_request: 50,
            log_level: "info".to_string(),
        }
    }
}

impl CarveConfig {
    pub fn with_seams_per_request(mut self, seams: u32) -> Self {
        self.seams_per_request = seams;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}
