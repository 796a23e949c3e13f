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

use crate::catalog::Catalog;
use crate::offset::GmtOffset;
use indexmap::IndexMap;

/// Stable identity of a resolved record, independent of its display fields.
///
/// Each resolved record gets a fresh id, so the same logical timezone added
/// twice yields two distinguishable entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(u64);

impl RecordId {
    /// The raw id value.
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A resolved timezone, either matched from the catalog or synthesized as a
/// fallback. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneRecord {
    id: RecordId,
    name: String,
    full_name: String,
    offset: GmtOffset,
    country: String,
    query: String,
}

impl TimezoneRecord {
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Display abbreviation, uppercase ("IST").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human readable zone name ("India Standard Time").
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn offset(&self) -> GmtOffset {
        self.offset
    }

    /// Country display name, `"Unknown"` for country-less fallbacks.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// The `NAME_Country` query identifier this record re-encodes to.
    pub fn query_id(&self) -> &str {
        &self.query
    }
}

struct Template {
    name: String,
    full_name: String,
    offset: GmtOffset,
    country: String,
}

/// Resolves raw query tokens (`ABBREV` or `ABBREV_Country Name`) to timezone
/// records against a loaded catalog.
///
/// The lookup map is keyed `UPPER(abbrev)_lower(country)` and iterates in
/// insertion order, which is catalog order; that order is the documented
/// tie-break for prefix fallback matching. First-seen wins on duplicate keys.
pub struct Resolver {
    map: IndexMap<String, Template>,
    next_id: u64,
}

impl Resolver {
    /// Builds the resolver lookup from a catalog. An empty catalog is valid
    /// and forces fallback synthesis for every token.
    pub fn new(catalog: &Catalog) -> Resolver {
        let mut map = IndexMap::new();
        for country in catalog.countries() {
            for zone in &country.zones {
                let key = format!(
                    "{}_{}",
                    zone.abbreviation.to_uppercase(),
                    country.name.to_lowercase()
                );
                map.entry(key).or_insert_with(|| Template {
                    name: zone.abbreviation.to_uppercase(),
                    full_name: zone.tz_name.clone(),
                    offset: GmtOffset::from_seconds(zone.gmt_offset_seconds),
                    country: country.name.clone(),
                });
            }
        }
        Resolver { map, next_id: 0 }
    }

    /// Resolves an ordered list of query tokens. Every token yields exactly
    /// one record; this never fails, malformed tokens resolve to fallbacks.
    pub fn resolve<I, S>(&mut self, tokens: I) -> Vec<TimezoneRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .map(|t| self.resolve_one(t.as_ref()))
            .collect()
    }

    /// Resolves a single query token: exact key match, then first prefix
    /// match in catalog order, then fallback synthesis.
    pub fn resolve_one(&mut self, token: &str) -> TimezoneRecord {
        let id = self.next_id();
        let (abbrev, remainder) = match token.split_once('_') {
            Some((a, r)) => (a, r),
            None => (token, ""),
        };
        let upper = abbrev.trim().to_uppercase();
        // Underscores separate country-name words in raw tokens.
        let country_raw = remainder.replace('_', " ");
        let country_lower = country_raw.to_lowercase();

        let exact = if country_lower.is_empty() {
            None
        } else {
            self.map.get(&format!("{}_{}", upper, country_lower))
        };
        let found = exact.or_else(|| {
            self.map
                .iter()
                .find(|(key, _)| {
                    key.split_once('_')
                        .map(|(prefix, _)| prefix == upper)
                        .unwrap_or(false)
                })
                .map(|(_, template)| template)
        });

        match found {
            Some(template) => TimezoneRecord {
                id,
                name: template.name.clone(),
                full_name: template.full_name.clone(),
                offset: template.offset,
                country: template.country.clone(),
                query: format!("{}_{}", template.name, template.country),
            },
            None => {
                log::debug!("no catalog match for `{}`, synthesizing fallback", token);
                self.synthesize(id, &upper, &country_raw)
            }
        }
    }

    fn synthesize(&self, id: RecordId, upper: &str, country: &str) -> TimezoneRecord {
        let name = if upper.is_empty() {
            "UTC".to_string()
        } else {
            upper.to_string()
        };
        let (full_name, country, query) = if country.is_empty() {
            (name.clone(), "Unknown".to_string(), name.clone())
        } else {
            (
                format!("{} ({})", name, country),
                country.to_string(),
                format!("{}_{}", name, country),
            )
        };
        TimezoneRecord {
            id,
            name,
            full_name,
            offset: GmtOffset::UTC,
            country,
            query,
        }
    }

    fn next_id(&mut self) -> RecordId {
        self.next_id += 1;
        RecordId(self.next_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Country, CountryZone};

    fn seed_resolver() -> Resolver {
        Resolver::new(&Catalog::seed())
    }

    #[test]
    fn exact_match() {
        let mut r = seed_resolver();
        let records = r.resolve(["IST_India"]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name(), "IST");
        assert_eq!(records[0].offset().to_string(), "+05:30");
        assert_eq!(records[0].country(), "India");
        assert_eq!(records[0].full_name(), "India Standard Time");
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        let mut r = seed_resolver();
        let records = r.resolve(["ist_india"]);
        assert_eq!(records[0].name(), "IST");
        assert_eq!(records[0].offset().to_string(), "+05:30");
    }

    #[test]
    fn prefix_fallback_takes_catalog_order() {
        let mut r = seed_resolver();
        // Both the US and Canada carry EST; the US comes first in the catalog.
        let records = r.resolve(["EST"]);
        assert_eq!(records[0].country(), "United States");
        assert_eq!(records[0].offset().to_string(), "-05:00");
    }

    #[test]
    fn unmatched_country_falls_back_to_prefix() {
        let mut r = seed_resolver();
        let records = r.resolve(["EST_Atlantis"]);
        // No EST_atlantis key, but EST_ prefixed keys exist.
        assert_eq!(records[0].country(), "United States");
    }

    #[test]
    fn fallback_synthesis_against_empty_catalog() {
        let mut r = Resolver::new(&Catalog::empty());
        let records = r.resolve(["ZZZ_Nowhere"]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name(), "ZZZ");
        assert_eq!(records[0].offset().to_string(), "+00:00");
        assert_eq!(records[0].country(), "Nowhere");
        assert_eq!(records[0].query_id(), "ZZZ_Nowhere");
    }

    #[test]
    fn fallback_without_country() {
        let mut r = Resolver::new(&Catalog::empty());
        let records = r.resolve(["ZZZ", ""]);
        assert_eq!(records[0].name(), "ZZZ");
        assert_eq!(records[0].country(), "Unknown");
        assert_eq!(records[0].query_id(), "ZZZ");
        // Empty abbreviation degrades to UTC.
        assert_eq!(records[1].name(), "UTC");
        assert_eq!(records[1].offset(), GmtOffset::UTC);
    }

    #[test]
    fn every_token_yields_one_record() {
        let mut r = seed_resolver();
        let records = r.resolve(["IST_India", "_", "junk", "GMT_United Kingdom"]);
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn duplicate_tokens_get_distinct_ids() {
        let mut r = seed_resolver();
        let records = r.resolve(["EST_United States", "EST_United States"]);
        assert_ne!(records[0].id(), records[1].id());
        assert_eq!(records[0].name(), records[1].name());
    }

    #[test]
    fn first_seen_wins_on_duplicate_keys() {
        let catalog = Catalog::from_countries(vec![Country {
            name: "Testland".into(),
            iso_code: "TL".into(),
            currency: None,
            phonecode: None,
            zones: vec![
                CountryZone {
                    abbreviation: "TST".into(),
                    zone_name: "Test/First".into(),
                    tz_name: "Test First Time".into(),
                    gmt_offset_seconds: 3600,
                },
                CountryZone {
                    abbreviation: "TST".into(),
                    zone_name: "Test/Second".into(),
                    tz_name: "Test Second Time".into(),
                    gmt_offset_seconds: 7200,
                },
            ],
        }]);
        let mut r = Resolver::new(&catalog);
        let records = r.resolve(["TST_Testland"]);
        assert_eq!(records[0].full_name(), "Test First Time");
        assert_eq!(records[0].offset().to_string(), "+01:00");
    }

    #[test]
    fn underscored_country_words_match() {
        let mut r = seed_resolver();
        let records = r.resolve(["EST_United_States"]);
        assert_eq!(records[0].country(), "United States");
        assert_eq!(records[0].offset().to_string(), "-05:00");
    }
}
