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

use thiserror::Error;

pub mod seed;

/// The error returned by a [CatalogProvider](CatalogProvider) when the
/// country dataset cannot be obtained.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The provider could not be reached or refused to answer.
    #[error("catalog provider unavailable: {0}")]
    Unavailable(String),

    /// The provider answered with unusable data.
    #[error("catalog data malformed: {0}")]
    Malformed(String),
}

/// One timezone entry of a country record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryZone {
    /// Short timezone abbreviation ("IST", "EST").
    pub abbreviation: String,

    /// IANA-style zone identifier ("Asia/Kolkata").
    pub zone_name: String,

    /// Human readable zone name ("India Standard Time").
    pub tz_name: String,

    /// GMT offset in seconds, east-positive.
    pub gmt_offset_seconds: i64,
}

/// One country record of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    /// Country display name.
    pub name: String,

    /// ISO 3166-1 alpha-2 code.
    pub iso_code: String,

    /// Currency code, when the dataset has one.
    pub currency: Option<String>,

    /// International phone prefix, when the dataset has one.
    pub phonecode: Option<String>,

    /// Timezones of this country, dataset order.
    pub zones: Vec<CountryZone>,
}

/// The external collaborator supplying the country/timezone dataset.
///
/// Implementations may fail; the catalog recovers locally by substituting the
/// built-in seed set, so a provider failure never surfaces as a hard error.
pub trait CatalogProvider {
    /// Loads every country of the dataset, in a stable order.
    ///
    /// # Errors
    ///
    /// Returns a [CatalogError](CatalogError) if the dataset cannot be
    /// obtained; the caller degrades to the seed set.
    fn load(&self) -> Result<Vec<Country>, CatalogError>;
}

/// The loaded country/timezone catalog.
///
/// Iteration order is the catalog order: provider order when a provider
/// succeeded, seed order otherwise. Downstream tie-breaks (resolver prefix
/// fallback) are defined against this order.
#[derive(Debug, Clone)]
pub struct Catalog {
    countries: Vec<Country>,
}

impl Catalog {
    /// Loads the catalog from a provider, degrading to the built-in seed set
    /// when the provider fails or returns nothing.
    pub fn load<P: CatalogProvider>(provider: &P) -> Catalog {
        match provider.load() {
            Ok(countries) if !countries.is_empty() => Catalog { countries },
            Ok(_) => {
                log::warn!("catalog provider returned no countries, using seed set");
                Self::seed()
            }
            Err(e) => {
                log::warn!("catalog provider failed ({}), using seed set", e);
                Self::seed()
            }
        }
    }

    /// The built-in seed catalog.
    pub fn seed() -> Catalog {
        Catalog {
            countries: seed::ORDERED.iter().map(|c| c.to_country()).collect(),
        }
    }

    /// An empty catalog. Resolving against it synthesizes a fallback record
    /// for every query token.
    pub fn empty() -> Catalog {
        Catalog {
            countries: Vec::new(),
        }
    }

    /// Creates a catalog directly from country records, preserving order.
    pub fn from_countries(countries: Vec<Country>) -> Catalog {
        Catalog { countries }
    }

    /// All countries in catalog order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Looks a country up by ISO code, case-insensitive.
    pub fn get(&self, iso_code: &str) -> Option<&Country> {
        self.countries
            .iter()
            .find(|c| c.iso_code.eq_ignore_ascii_case(iso_code))
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}
