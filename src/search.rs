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

use crate::catalog::{Catalog, Country};
use crate::offset::{GmtOffset, WallClockExt};
use crate::system::Clock;
use crate::timefmt;
use indexmap::IndexMap;

/// One ranked search result: the country's catalog position and record.
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'c> {
    pub position: usize,
    pub country: &'c Country,
}

struct LoweredZone {
    abbreviation: String,
    zone_name: String,
    tz_name: String,
}

struct LoweredCountry {
    name: String,
    iso_code: String,
    currency: Option<String>,
    phonecode: Option<String>,
    zones: Vec<LoweredZone>,
}

/// Interactive country search over name, ISO code, currency, phone code and
/// timezone fields (abbreviation, zone identifier, display name).
///
/// Matching is case-insensitive substring containment; ranking follows a
/// fixed precedence (zone-identifier exact, abbreviation exact, name exact,
/// then the same three as prefixes, then alphabetical by name).
///
/// Built once per catalog load. The postings table (lowered field value →
/// country positions) only accelerates candidate collection; results are
/// identical to a naive per-country rescan.
pub struct SearchIndex<'c> {
    catalog: &'c Catalog,
    lowered: Vec<LoweredCountry>,
    postings: IndexMap<String, Vec<u32>>,
}

fn post(postings: &mut IndexMap<String, Vec<u32>>, term: &str, pos: u32) {
    if term.is_empty() {
        return;
    }
    let positions = postings.entry(term.to_owned()).or_default();
    if positions.last() != Some(&pos) {
        positions.push(pos);
    }
}

impl<'c> SearchIndex<'c> {
    pub fn new(catalog: &'c Catalog) -> SearchIndex<'c> {
        let mut lowered = Vec::with_capacity(catalog.len());
        let mut postings = IndexMap::new();
        for (pos, country) in catalog.countries().iter().enumerate() {
            let entry = LoweredCountry {
                name: country.name.to_lowercase(),
                iso_code: country.iso_code.to_lowercase(),
                currency: country.currency.as_ref().map(|c| c.to_lowercase()),
                phonecode: country.phonecode.as_ref().map(|p| p.to_lowercase()),
                zones: country
                    .zones
                    .iter()
                    .map(|z| LoweredZone {
                        abbreviation: z.abbreviation.to_lowercase(),
                        zone_name: z.zone_name.to_lowercase(),
                        tz_name: z.tz_name.to_lowercase(),
                    })
                    .collect(),
            };
            let pos = pos as u32;
            post(&mut postings, &entry.name, pos);
            post(&mut postings, &entry.iso_code, pos);
            if let Some(currency) = &entry.currency {
                post(&mut postings, currency, pos);
            }
            if let Some(phonecode) = &entry.phonecode {
                post(&mut postings, phonecode, pos);
            }
            for zone in &entry.zones {
                post(&mut postings, &zone.abbreviation, pos);
                post(&mut postings, &zone.zone_name, pos);
                post(&mut postings, &zone.tz_name, pos);
            }
            lowered.push(entry);
        }
        SearchIndex {
            catalog,
            lowered,
            postings,
        }
    }

    /// Runs a free-text query and returns ranked hits. A blank query matches
    /// nothing. The result count is unbounded; the selection cap is enforced
    /// by the session, not here.
    pub fn query(&self, input: &str) -> Vec<SearchHit<'c>> {
        let value = input.trim().to_lowercase();
        if value.is_empty() {
            return Vec::new();
        }
        let mut matched = vec![false; self.lowered.len()];
        for (term, positions) in &self.postings {
            if term.contains(&value) {
                for &pos in positions {
                    matched[pos as usize] = true;
                }
            }
        }
        let mut positions: Vec<usize> = matched
            .iter()
            .enumerate()
            .filter_map(|(pos, hit)| hit.then_some(pos))
            .collect();
        positions.sort_by(|&a, &b| self.rank_key(a, &value).cmp(&self.rank_key(b, &value)));
        positions
            .into_iter()
            .map(|position| SearchHit {
                position,
                country: &self.catalog.countries()[position],
            })
            .collect()
    }

    // Six boolean tie-breaks in descending precedence, inverted so false
    // sorts first, then the alphabetical fallthrough.
    fn rank_key<'a>(&'a self, pos: usize, value: &str) -> (bool, bool, bool, bool, bool, bool, &'a str) {
        let country = &self.lowered[pos];
        let zone_exact = country.zones.iter().any(|z| z.zone_name == value);
        let abbrev_exact = country.zones.iter().any(|z| z.abbreviation == value);
        let name_exact = country.name == value;
        let zone_prefix = country.zones.iter().any(|z| z.zone_name.starts_with(value));
        let abbrev_prefix = country
            .zones
            .iter()
            .any(|z| z.abbreviation.starts_with(value));
        let name_prefix = country.name.starts_with(value);
        (
            !zone_exact,
            !abbrev_exact,
            !name_exact,
            !zone_prefix,
            !abbrev_prefix,
            !name_prefix,
            &country.name,
        )
    }
}

/// "Current time per visible candidate": the preview string for each hit's
/// first timezone, `None` for a country without zone data. Recomputed on the
/// refresh cadence while the result list is open.
pub fn current_times<C: Clock>(
    hits: &[SearchHit],
    clock: &C,
    is_24_hour: bool,
) -> Vec<Option<String>> {
    let local = clock.local_gmt_offset();
    let now = clock.local_wall_clock();
    hits.iter()
        .map(|hit| {
            hit.country.zones.first().map(|zone| {
                let offset = GmtOffset::from_seconds(zone.gmt_offset_seconds);
                timefmt::format_wall_time(now.to_target_time(offset, local).time(), is_24_hour)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Country, CountryZone};
    use crate::system::testing::FixedClock;
    use time::macros::{datetime, offset};

    fn names<'c>(hits: &[SearchHit<'c>]) -> Vec<&'c str> {
        hits.iter().map(|h| h.country.name.as_str()).collect()
    }

    #[test]
    fn blank_query_matches_nothing() {
        let catalog = Catalog::seed();
        let index = SearchIndex::new(&catalog);
        assert!(index.query("").is_empty());
        assert!(index.query("   ").is_empty());
    }

    #[test]
    fn substring_match_over_all_fields() {
        let catalog = Catalog::seed();
        let index = SearchIndex::new(&catalog);
        assert_eq!(names(&index.query("kolkata")), vec!["India"]);
        assert_eq!(names(&index.query("jpy")), vec!["Japan"]);
        assert_eq!(names(&index.query("newfoundland")), vec!["Canada"]);
        assert!(names(&index.query("king")).contains(&"United Kingdom"));
    }

    #[test]
    fn exact_abbreviation_outranks_name_substring() {
        // A country whose name merely contains "ist" must rank below the
        // country carrying the IST abbreviation.
        let mut countries = Catalog::seed().countries().to_vec();
        countries.push(Country {
            name: "Distopia".into(),
            iso_code: "DT".into(),
            currency: None,
            phonecode: None,
            zones: vec![CountryZone {
                abbreviation: "DTT".into(),
                zone_name: "Distopia/Central".into(),
                tz_name: "Distopia Time".into(),
                gmt_offset_seconds: 0,
            }],
        });
        let catalog = Catalog::from_countries(countries);
        let index = SearchIndex::new(&catalog);
        let hits = index.query("IST");
        assert_eq!(hits[0].country.name, "India");
        assert!(names(&hits).contains(&"Distopia"));
    }

    #[test]
    fn exact_zone_identifier_ranks_first() {
        let catalog = Catalog::seed();
        let index = SearchIndex::new(&catalog);
        let hits = index.query("Asia/Tokyo");
        assert_eq!(hits[0].country.name, "Japan");
    }

    #[test]
    fn equal_ranks_fall_through_alphabetically() {
        let catalog = Catalog::seed();
        let index = SearchIndex::new(&catalog);
        // All three tie on the zone-identifier prefix rule (`Europe/...`),
        // so country name decides the order.
        assert_eq!(
            names(&index.query("eur")),
            vec!["France", "Germany", "United Kingdom"]
        );
    }

    #[test]
    fn prefix_on_zone_identifier() {
        let catalog = Catalog::seed();
        let index = SearchIndex::new(&catalog);
        let hits = index.query("asia/");
        assert_eq!(names(&hits), vec!["India", "Japan"]);
    }

    #[test]
    fn matches_equal_naive_rescan() {
        let catalog = Catalog::seed();
        let index = SearchIndex::new(&catalog);
        for query in ["st", "a", "united", "1", "gmt", "pacific", "xyz"] {
            let value = query.to_lowercase();
            let naive: Vec<&str> = catalog
                .countries()
                .iter()
                .filter(|c| {
                    c.name.to_lowercase().contains(&value)
                        || c.iso_code.to_lowercase().contains(&value)
                        || c.currency
                            .as_ref()
                            .is_some_and(|v| v.to_lowercase().contains(&value))
                        || c.phonecode
                            .as_ref()
                            .is_some_and(|v| v.to_lowercase().contains(&value))
                        || c.zones.iter().any(|z| {
                            z.abbreviation.to_lowercase().contains(&value)
                                || z.zone_name.to_lowercase().contains(&value)
                                || z.tz_name.to_lowercase().contains(&value)
                        })
                })
                .map(|c| c.name.as_str())
                .collect();
            let mut indexed = names(&index.query(query));
            indexed.sort_unstable();
            let mut naive = naive;
            naive.sort_unstable();
            assert_eq!(indexed, naive, "query `{}`", query);
        }
    }

    #[test]
    fn current_time_previews() {
        let catalog = Catalog::seed();
        let index = SearchIndex::new(&catalog);
        let clock = FixedClock {
            now: datetime!(2024-06-01 12:00 UTC),
            offset: offset!(UTC),
        };
        let hits = index.query("india");
        let times = current_times(&hits, &clock, false);
        assert_eq!(times, vec![Some("5:30 PM".to_string())]);
        let times = current_times(&hits, &clock, true);
        assert_eq!(times, vec![Some("17:30".to_string())]);
    }
}
