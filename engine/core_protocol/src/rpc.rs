// SPDX-FileCopyrightText: 2023 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::url::Url;
use serde::{Deserialize, Serialize};

/// Browser-level actions the page asks its embedder to perform.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum PageHandlerRequest {
    /// Open the url outside of the page, e.g. in a new tab.
    #[serde(rename = "openURL")]
    OpenUrl(Url),
}
