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

//! Built-in seed dataset used when no catalog provider is available. A small
//! but realistic cut of the usual country/timezone reference data, enough to
//! keep the UI usable offline.

use super::{Country, CountryZone};
use phf::{phf_map, Map};

/// Seed counterpart of [CountryZone](super::CountryZone), static storage.
pub struct SeedZone {
    pub abbreviation: &'static str,
    pub zone_name: &'static str,
    pub tz_name: &'static str,
    pub gmt_offset_seconds: i64,
}

/// Seed counterpart of [Country](super::Country), static storage.
pub struct SeedCountry {
    pub name: &'static str,
    pub iso_code: &'static str,
    pub currency: &'static str,
    pub phonecode: &'static str,
    pub zones: &'static [SeedZone],
}

impl SeedCountry {
    pub(super) fn to_country(&self) -> Country {
        Country {
            name: self.name.into(),
            iso_code: self.iso_code.into(),
            currency: Some(self.currency.into()),
            phonecode: Some(self.phonecode.into()),
            zones: self
                .zones
                .iter()
                .map(|z| CountryZone {
                    abbreviation: z.abbreviation.into(),
                    zone_name: z.zone_name.into(),
                    tz_name: z.tz_name.into(),
                    gmt_offset_seconds: z.gmt_offset_seconds,
                })
                .collect(),
        }
    }
}

static INDIA: SeedCountry = SeedCountry {
    name: "India",
    iso_code: "IN",
    currency: "INR",
    phonecode: "91",
    zones: &[SeedZone {
        abbreviation: "IST",
        zone_name: "Asia/Kolkata",
        tz_name: "India Standard Time",
        gmt_offset_seconds: 19800,
    }],
};

static UNITED_STATES: SeedCountry = SeedCountry {
    name: "United States",
    iso_code: "US",
    currency: "USD",
    phonecode: "1",
    zones: &[
        SeedZone {
            abbreviation: "EST",
            zone_name: "America/New_York",
            tz_name: "Eastern Standard Time",
            gmt_offset_seconds: -18000,
        },
        SeedZone {
            abbreviation: "CST",
            zone_name: "America/Chicago",
            tz_name: "Central Standard Time",
            gmt_offset_seconds: -21600,
        },
        SeedZone {
            abbreviation: "MST",
            zone_name: "America/Denver",
            tz_name: "Mountain Standard Time",
            gmt_offset_seconds: -25200,
        },
        SeedZone {
            abbreviation: "PST",
            zone_name: "America/Los_Angeles",
            tz_name: "Pacific Standard Time",
            gmt_offset_seconds: -28800,
        },
        SeedZone {
            abbreviation: "AKST",
            zone_name: "America/Anchorage",
            tz_name: "Alaska Standard Time",
            gmt_offset_seconds: -32400,
        },
        SeedZone {
            abbreviation: "HST",
            zone_name: "Pacific/Honolulu",
            tz_name: "Hawaii-Aleutian Standard Time",
            gmt_offset_seconds: -36000,
        },
    ],
};

static UNITED_KINGDOM: SeedCountry = SeedCountry {
    name: "United Kingdom",
    iso_code: "GB",
    currency: "GBP",
    phonecode: "44",
    zones: &[SeedZone {
        abbreviation: "GMT",
        zone_name: "Europe/London",
        tz_name: "Greenwich Mean Time",
        gmt_offset_seconds: 0,
    }],
};

static JAPAN: SeedCountry = SeedCountry {
    name: "Japan",
    iso_code: "JP",
    currency: "JPY",
    phonecode: "81",
    zones: &[SeedZone {
        abbreviation: "JST",
        zone_name: "Asia/Tokyo",
        tz_name: "Japan Standard Time",
        gmt_offset_seconds: 32400,
    }],
};

static AUSTRALIA: SeedCountry = SeedCountry {
    name: "Australia",
    iso_code: "AU",
    currency: "AUD",
    phonecode: "61",
    zones: &[
        SeedZone {
            abbreviation: "AEST",
            zone_name: "Australia/Brisbane",
            tz_name: "Australian Eastern Standard Time",
            gmt_offset_seconds: 36000,
        },
        SeedZone {
            abbreviation: "ACST",
            zone_name: "Australia/Adelaide",
            tz_name: "Australian Central Standard Time",
            gmt_offset_seconds: 34200,
        },
        SeedZone {
            abbreviation: "AWST",
            zone_name: "Australia/Perth",
            tz_name: "Australian Western Standard Time",
            gmt_offset_seconds: 28800,
        },
    ],
};

static GERMANY: SeedCountry = SeedCountry {
    name: "Germany",
    iso_code: "DE",
    currency: "EUR",
    phonecode: "49",
    zones: &[SeedZone {
        abbreviation: "CET",
        zone_name: "Europe/Berlin",
        tz_name: "Central European Time",
        gmt_offset_seconds: 3600,
    }],
};

static FRANCE: SeedCountry = SeedCountry {
    name: "France",
    iso_code: "FR",
    currency: "EUR",
    phonecode: "33",
    zones: &[SeedZone {
        abbreviation: "CET",
        zone_name: "Europe/Paris",
        tz_name: "Central European Time",
        gmt_offset_seconds: 3600,
    }],
};

static BRAZIL: SeedCountry = SeedCountry {
    name: "Brazil",
    iso_code: "BR",
    currency: "BRL",
    phonecode: "55",
    zones: &[SeedZone {
        abbreviation: "BRT",
        zone_name: "America/Sao_Paulo",
        tz_name: "Brasilia Time",
        gmt_offset_seconds: -10800,
    }],
};

static CANADA: SeedCountry = SeedCountry {
    name: "Canada",
    iso_code: "CA",
    currency: "CAD",
    phonecode: "1",
    zones: &[
        SeedZone {
            abbreviation: "EST",
            zone_name: "America/Toronto",
            tz_name: "Eastern Standard Time",
            gmt_offset_seconds: -18000,
        },
        SeedZone {
            abbreviation: "NST",
            zone_name: "America/St_Johns",
            tz_name: "Newfoundland Standard Time",
            gmt_offset_seconds: -12600,
        },
        SeedZone {
            abbreviation: "PST",
            zone_name: "America/Vancouver",
            tz_name: "Pacific Standard Time",
            gmt_offset_seconds: -28800,
        },
    ],
};

/// Seed countries in catalog iteration order.
pub static ORDERED: &[&SeedCountry] = &[
    &INDIA,
    &UNITED_STATES,
    &UNITED_KINGDOM,
    &JAPAN,
    &AUSTRALIA,
    &GERMANY,
    &FRANCE,
    &BRAZIL,
    &CANADA,
];

/// Seed countries keyed by ISO 3166-1 alpha-2 code.
pub static BY_ISO: Map<&'static str, &'static SeedCountry> = phf_map! {
    "IN" => &INDIA,
    "US" => &UNITED_STATES,
    "GB" => &UNITED_KINGDOM,
    "JP" => &JAPAN,
    "AU" => &AUSTRALIA,
    "DE" => &GERMANY,
    "FR" => &FRANCE,
    "BR" => &BRAZIL,
    "CA" => &CANADA,
};

/// Looks a seed country up by ISO code (uppercase).
pub fn get(iso_code: &str) -> Option<&'static SeedCountry> {
    BY_ISO.get(iso_code.to_ascii_uppercase().as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_and_map_agree() {
        assert_eq!(ORDERED.len(), BY_ISO.len());
        for c in ORDERED {
            assert!(std::ptr::eq(*BY_ISO.get(c.iso_code).unwrap(), *c));
        }
    }

    #[test]
    fn get_is_case_insensitive() {
        assert_eq!(get("in").unwrap().name, "India");
        assert_eq!(get("Us").unwrap().name, "United States");
        assert!(get("xx").is_none());
    }
}
