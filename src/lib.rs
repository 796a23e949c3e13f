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

//! Core logic for a client-side time zone comparison tool: users add
//! countries or time zones, see their local times against a shared
//! comparison instant, edit any one card's time, and share the whole state
//! through a URL slug.
//!
//! The crate is UI-toolkit agnostic. It owns the catalog (with a built-in
//! seed fallback), the query-token resolver, the slug codec, the interactive
//! search index, the session state and the cooperative timing primitives; a
//! front end drives it from event and timer callbacks.

pub mod catalog;
pub mod offset;
pub mod resolver;
pub mod route;
pub mod sched;
pub mod search;
pub mod session;
pub mod slug;
pub mod system;
pub mod timefmt;

pub use catalog::{Catalog, CatalogError, CatalogProvider, Country, CountryZone};
pub use offset::{GmtOffset, OffsetParseError, WallClockExt};
pub use resolver::{RecordId, Resolver, TimezoneRecord};
pub use search::{SearchHit, SearchIndex};
pub use session::{DisplayPrefs, Session, ViewMode, MAX_SELECTION};
pub use system::{Clock, SystemClock};

#[cfg(test)]
mod tests {
    use crate::system::testing::FixedClock;
    use crate::{slug, Catalog, Resolver, Session};
    use time::macros::{datetime, offset};

    #[test]
    fn slug_to_records_and_back() {
        let tokens = slug::decode("EST_United States-to-GMT_United Kingdom");
        assert_eq!(tokens, vec!["EST_United States", "GMT_United Kingdom"]);

        let mut resolver = Resolver::new(&Catalog::seed());
        let records = resolver.resolve(&tokens);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].offset().to_string(), "-05:00");
        assert_eq!(records[1].offset().to_string(), "+00:00");

        let re_encoded = slug::encode(records.iter().map(|r| r.query_id()));
        assert_eq!(
            re_encoded,
            "EST_United%20States-to-GMT_United%20Kingdom"
        );
        assert_eq!(slug::decode(&re_encoded), tokens);
    }

    #[test]
    fn session_round_trip_through_url() {
        let clock = FixedClock {
            now: datetime!(2024-06-01 12:00 UTC),
            offset: offset!(UTC),
        };
        let mut resolver = Resolver::new(&Catalog::seed());
        let mut session = Session::new(clock);
        session.load_slug(&mut resolver, "EST_United%20States-to-GMT_United%20Kingdom");
        assert_eq!(session.entries().len(), 2);
        assert_eq!(
            session.current_path(),
            "/converter/EST_United%20States-to-GMT_United%20Kingdom"
        );
    }

    #[test]
    fn unknown_tokens_still_produce_a_usable_session() {
        let clock = FixedClock {
            now: datetime!(2024-06-01 12:00 UTC),
            offset: offset!(UTC),
        };
        let mut resolver = Resolver::new(&Catalog::empty());
        let mut session = Session::new(clock);
        session.load_slug(&mut resolver, "ZZZ_Nowhere");
        assert_eq!(session.entries().len(), 1);
        assert_eq!(session.entries()[0].name(), "ZZZ");
        assert_eq!(session.entries()[0].offset().to_string(), "+00:00");
        assert_eq!(session.display_time(&session.entries()[0]), "12:00 PM");
    }
}
