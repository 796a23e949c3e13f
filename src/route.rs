// Copyright (c) 2025, Yuri6037
//
// All rights reserved.
//
// Redistribution and use in source and binary forms, with or without modification,
// are permitted provided that the following conditions are met:
//
// * Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
// * Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
// * Neither the name of tzcompare nor the names of its contributors
// may be used to endorse or promote products derived from this software
// without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS
// "AS IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT
// LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR
// A PARTICULAR PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT OWNER OR
// CONTRIBUTORS BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL,
// EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO,
// PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR
// PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF
// LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING
// NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE OF THIS
// SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

//! The `/converter/<slug>` URL surface. The slug is the state; `is24Hour`
//! and `viewMode` ride along as advisory query parameters.

use crate::session::{DisplayPrefs, ViewMode};

const BASE: &str = "/converter";

/// A parsed converter path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRoute {
    pub slug: String,
    pub prefs: DisplayPrefs,
}

/// Builds the converter path for a slug and preferences. Default preferences
/// produce no query string; an empty slug produces the bare `/converter`
/// landing path.
pub fn converter_path(slug: &str, prefs: &DisplayPrefs) -> String {
    let mut path = if slug.is_empty() {
        BASE.to_string()
    } else {
        format!("{}/{}", BASE, slug)
    };
    let mut params = Vec::new();
    if prefs.is_24_hour {
        params.push("is24Hour=true".to_string());
    }
    if prefs.view_mode == ViewMode::Grid {
        params.push(format!("viewMode={}", ViewMode::Grid));
    }
    if !params.is_empty() {
        path.push('?');
        path.push_str(&params.join("&"));
    }
    path
}

/// Parses a converter path back into slug and preferences. Unknown query
/// parameters are ignored, absent ones mean defaults. `None` for paths
/// outside the converter surface.
pub fn parse_converter_path(path: &str) -> Option<ParsedRoute> {
    let (path, query) = path.split_once('?').unwrap_or((path, ""));
    let rest = path.strip_prefix(BASE)?;
    // `/converterfoo` is a foreign path, not a slug.
    if !rest.is_empty() && !rest.starts_with('/') {
        return None;
    }
    let slug = rest.strip_prefix('/').unwrap_or(rest);
    if slug.contains('/') {
        return None;
    }
    let mut prefs = DisplayPrefs::default();
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "is24Hour" => prefs.is_24_hour = value == "true",
            // Infallible: anything but "grid" reads as list.
            "viewMode" => prefs.view_mode = value.parse().unwrap_or_default(),
            _ => {}
        }
    }
    Some(ParsedRoute {
        slug: slug.to_string(),
        prefs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_without_params() {
        let prefs = DisplayPrefs::default();
        assert_eq!(converter_path("IST_India", &prefs), "/converter/IST_India");
        assert_eq!(converter_path("", &prefs), "/converter");
    }

    #[test]
    fn path_with_params() {
        let prefs = DisplayPrefs {
            is_24_hour: true,
            view_mode: ViewMode::Grid,
        };
        assert_eq!(
            converter_path("A-to-B", &prefs),
            "/converter/A-to-B?is24Hour=true&viewMode=grid"
        );
    }

    #[test]
    fn parse_round_trip() {
        for prefs in [
            DisplayPrefs::default(),
            DisplayPrefs {
                is_24_hour: true,
                view_mode: ViewMode::List,
            },
            DisplayPrefs {
                is_24_hour: false,
                view_mode: ViewMode::Grid,
            },
        ] {
            let path = converter_path("EST_United%20States-to-GMT_United%20Kingdom", &prefs);
            let parsed = parse_converter_path(&path).unwrap();
            assert_eq!(parsed.slug, "EST_United%20States-to-GMT_United%20Kingdom");
            assert_eq!(parsed.prefs, prefs);
        }
    }

    #[test]
    fn parse_tolerates_noise() {
        let parsed = parse_converter_path("/converter/A?bogus=1&is24Hour=maybe&viewMode=spiral")
            .unwrap();
        assert_eq!(parsed.slug, "A");
        assert!(!parsed.prefs.is_24_hour);
        assert_eq!(parsed.prefs.view_mode, ViewMode::List);
    }

    #[test]
    fn parse_rejects_foreign_paths() {
        assert!(parse_converter_path("/about").is_none());
        assert!(parse_converter_path("/converter/a/b").is_none());
        assert!(parse_converter_path("/converterfoo").is_none());
        assert!(parse_converter_path("/converters?is24Hour=true").is_none());
    }

    #[test]
    fn parse_bare_landing_page() {
        let parsed = parse_converter_path("/converter").unwrap();
        assert_eq!(parsed.slug, "");
    }
}
