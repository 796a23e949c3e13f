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

//! URL slug codec for an ordered list of timezone query identifiers.
//!
//! Grammar: one segment per id, joined by `-`, with a literal `to` marker
//! after the first segment once there are two or more ids
//! (`EST_United%20States-to-GMT_United%20Kingdom`).
//!
//! [encode](encode) percent-escapes every non-alphanumeric byte of an id
//! except `_` (hyphens included), so encoded ids can never collide with the
//! separator grammar, and [decode](decode) correspondingly splits the raw
//! slug *before* percent-decoding each segment. Hand-typed slugs carrying an
//! unescaped `-` or a literal `to` token inside an id still mis-split; that
//! ambiguity is inherent to the grammar and is resolved in favor of the
//! separator reading.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// Everything non-alphanumeric except `_` gets escaped, `-` included.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'_');

const TO: &str = "to";

/// Encodes an ordered id list into a single URL path segment. Empty ids are
/// dropped; an empty list encodes to the empty string.
pub fn encode<I, S>(ids: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let encoded: Vec<String> = ids
        .into_iter()
        .filter(|id| !id.as_ref().is_empty())
        .map(|id| utf8_percent_encode(id.as_ref(), SEGMENT).to_string())
        .collect();
    match encoded.len() {
        0 => String::new(),
        1 => encoded.into_iter().next().unwrap(),
        _ => format!("{}-to-{}", encoded[0], encoded[1..].join("-")),
    }
}

/// Decodes a slug back into its ordered id list.
///
/// Without a `to` marker right after the first segment, only the first
/// segment is returned. With it, every further segment except literal `to`
/// tokens is returned. Segments are percent-decoded after splitting; a
/// segment that is not valid UTF-8 once decoded is kept raw.
pub fn decode(slug: &str) -> Vec<String> {
    let parts: Vec<&str> = slug.split('-').filter(|p| !p.is_empty()).collect();
    if parts.is_empty() {
        return Vec::new();
    }
    if parts.len() < 2 || parts[1] != TO {
        return vec![decode_segment(parts[0])];
    }
    parts
        .iter()
        .enumerate()
        .filter(|(i, p)| **p != TO && (*i == 0 || *i > 1))
        .map(|(_, p)| decode_segment(p))
        .collect()
}

fn decode_segment(segment: &str) -> String {
    percent_decode_str(segment)
        .decode_utf8()
        .map(|c| c.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_empty_and_single() {
        assert_eq!(encode(Vec::<&str>::new()), "");
        assert_eq!(encode(["", ""]), "");
        assert_eq!(encode(["IST_India"]), "IST_India");
    }

    #[test]
    fn encode_multiple() {
        assert_eq!(
            encode(["EST_United States", "GMT_United Kingdom"]),
            "EST_United%20States-to-GMT_United%20Kingdom"
        );
        assert_eq!(encode(["A", "B", "C"]), "A-to-B-C");
    }

    #[test]
    fn decode_single() {
        assert_eq!(decode("IST_India"), vec!["IST_India"]);
        assert_eq!(decode("EST_United%20States"), vec!["EST_United States"]);
    }

    #[test]
    fn decode_multiple() {
        assert_eq!(
            decode("EST_United States-to-GMT_United Kingdom"),
            vec!["EST_United States", "GMT_United Kingdom"]
        );
        assert_eq!(decode("A-to-B-C"), vec!["A", "B", "C"]);
        assert_eq!(decode("A-to-B-to-C"), vec!["A", "B", "C"]);
    }

    #[test]
    fn decode_without_to_marker_keeps_first_segment_only() {
        assert_eq!(decode("abc-def"), vec!["abc"]);
        assert_eq!(decode("abc-def-to-ghi"), vec!["abc"]);
    }

    #[test]
    fn decode_edge_cases() {
        assert_eq!(decode(""), Vec::<String>::new());
        assert_eq!(decode("---"), Vec::<String>::new());
        assert_eq!(decode("-to-"), vec!["to"]);
        assert_eq!(decode("-abc-"), vec!["abc"]);
    }

    #[test]
    fn round_trip_plain_ids() {
        let ids = vec!["EST_United States", "GMT_United Kingdom", "IST_India"];
        assert_eq!(decode(&encode(ids.clone())), ids);
    }

    #[test]
    fn round_trip_hyphenated_ids() {
        // Hyphens are escaped on encode, so they survive the split.
        let ids = vec!["GMT-1_Atlantis", "UTC-to-nowhere"];
        let slug = encode(ids.clone());
        assert!(!slug.contains("GMT-1"));
        assert_eq!(decode(&slug), ids);
    }

    #[test]
    fn decode_tolerates_bad_escapes() {
        assert_eq!(decode("AB%ZZ"), vec!["AB%ZZ"]);
        assert_eq!(decode("%FF"), vec!["%FF"]);
    }
}
