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

use crate::offset::WallClockExt;
use crate::resolver::{RecordId, Resolver, TimezoneRecord};
use crate::route;
use crate::sched::{NavBatcher, NAV_SETTLE};
use crate::slug;
use crate::system::Clock;
use crate::timefmt;
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::{Duration, Instant};
use time::{PrimitiveDateTime, Time};

/// Maximum number of concurrent selection entries.
pub const MAX_SELECTION: usize = 10;

// Lifetime of the "too many time zones" notice.
const NOTICE_TTL: Duration = Duration::from_secs(3);

const MINUTES_PER_DAY: f64 = (24 * 60) as f64;

/// Result list layout, an advisory display preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

impl Display for ViewMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewMode::List => f.write_str("list"),
            ViewMode::Grid => f.write_str("grid"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = Infallible;

    // Advisory query parameter: anything but the grid literal is list.
    fn from_str(s: &str) -> Result<ViewMode, Infallible> {
        Ok(match s {
            "grid" => ViewMode::Grid,
            _ => ViewMode::List,
        })
    }
}

/// Display preferences carried as URL query parameters, not part of the core
/// data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayPrefs {
    pub is_24_hour: bool,
    pub view_mode: ViewMode,
}

/// Top-level session state: the ordered selection list, the shared comparison
/// instant, display preferences, the transient limit notice and the pending
/// navigation buffer.
///
/// The session is the single writer for all of this; components read through
/// accessors and mutate through the designated operations. During a drag the
/// list is reordered on a private working copy and committed atomically on
/// drag end.
pub struct Session<C: Clock> {
    clock: C,
    entries: Vec<TimezoneRecord>,
    instant: PrimitiveDateTime,
    prefs: DisplayPrefs,
    notice_until: Option<Instant>,
    nav: NavBatcher,
    drag: Option<Vec<TimezoneRecord>>,
}

impl<C: Clock> Session<C> {
    /// Creates a session anchored at the clock's current local wall time.
    pub fn new(clock: C) -> Session<C> {
        let instant = clock.local_wall_clock();
        Session {
            clock,
            entries: Vec::new(),
            instant,
            prefs: DisplayPrefs::default(),
            notice_until: None,
            nav: NavBatcher::new(NAV_SETTLE),
            drag: None,
        }
    }

    /// The ordered selection list.
    pub fn entries(&self) -> &[TimezoneRecord] {
        &self.entries
    }

    /// The shared comparison instant (host-local wall clock).
    pub fn instant(&self) -> PrimitiveDateTime {
        self.instant
    }

    pub fn prefs(&self) -> DisplayPrefs {
        self.prefs
    }

    pub fn set_instant(&mut self, instant: PrimitiveDateTime) {
        self.instant = instant;
    }

    pub fn set_24_hour(&mut self, is_24_hour: bool, now: Instant) {
        if self.prefs.is_24_hour != is_24_hour {
            self.prefs.is_24_hour = is_24_hour;
            self.schedule_nav(now);
        }
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode, now: Instant) {
        if self.prefs.view_mode != view_mode {
            self.prefs.view_mode = view_mode;
            self.schedule_nav(now);
        }
    }

    /// Adds a resolved record to the selection. An add beyond
    /// [MAX_SELECTION](MAX_SELECTION) is dropped, not queued, and raises the
    /// limit notice once for this attempt.
    pub fn add(&mut self, record: TimezoneRecord, now: Instant) -> bool {
        if self.entries.len() >= MAX_SELECTION {
            log::debug!(
                "selection full ({} entries), dropping `{}`",
                MAX_SELECTION,
                record.name()
            );
            self.notice_until = Some(now + NOTICE_TTL);
            return false;
        }
        self.entries.push(record);
        // The working copy is stale now; committing it would drop this entry.
        self.drag = None;
        self.schedule_nav(now);
        true
    }

    /// Removes the entry with the given id. Removing below the cap also
    /// clears a still-visible limit notice.
    pub fn remove(&mut self, id: RecordId, now: Instant) -> bool {
        let before = self.entries.len();
        self.entries.retain(|r| r.id() != id);
        if self.entries.len() == before {
            return false;
        }
        if self.entries.len() < MAX_SELECTION {
            self.notice_until = None;
        }
        self.drag = None;
        self.schedule_nav(now);
        true
    }

    /// True while the selection-limit notice should be visible.
    pub fn limit_notice_active(&self, now: Instant) -> bool {
        self.notice_until.is_some_and(|until| now < until)
    }

    /// Dismisses the limit notice ahead of its timeout.
    pub fn dismiss_notice(&mut self) {
        self.notice_until = None;
    }

    /// Periodic housekeeping: expires the limit notice.
    pub fn tick(&mut self, now: Instant) {
        if self.notice_until.is_some_and(|until| now >= until) {
            self.notice_until = None;
        }
    }

    /// Snapshots the selection into a private working copy for a drag
    /// operation. A drag already in progress is restarted; adding or
    /// removing an entry while dragging cancels the drag, since the
    /// working copy no longer reflects the list.
    pub fn begin_drag(&mut self) {
        self.drag = Some(self.entries.clone());
    }

    /// Moves an entry inside the drag working copy. The public list is not
    /// touched until [commit_drag](Session::commit_drag).
    pub fn drag_move(&mut self, from: usize, to: usize) -> bool {
        let Some(working) = self.drag.as_mut() else {
            return false;
        };
        if from >= working.len() || to >= working.len() {
            return false;
        }
        let entry = working.remove(from);
        working.insert(to, entry);
        true
    }

    /// Commits the drag working copy atomically. Schedules a navigation only
    /// when the order actually changed.
    pub fn commit_drag(&mut self, now: Instant) {
        if let Some(working) = self.drag.take() {
            if working.iter().map(|r| r.id()).ne(self.entries.iter().map(|r| r.id())) {
                self.entries = working;
                self.schedule_nav(now);
            }
        }
    }

    /// Discards the drag working copy.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The record's wall clock at the shared comparison instant.
    pub fn zone_time(&self, record: &TimezoneRecord) -> PrimitiveDateTime {
        self.instant
            .to_target_time(record.offset(), self.clock.local_gmt_offset())
    }

    /// The formatted time line of a card (`14:05` / `2:05 PM`).
    pub fn display_time(&self, record: &TimezoneRecord) -> String {
        timefmt::format_wall_time(self.zone_time(record).time(), self.prefs.is_24_hour)
    }

    /// The formatted date line of a card (`Sat, Jun 1`).
    pub fn display_date(&self, record: &TimezoneRecord) -> String {
        timefmt::format_wall_date(self.zone_time(record).date())
    }

    /// Applies a manually entered time to one entry, re-anchoring the shared
    /// instant so every entry reflects the change. An unparseable edit is
    /// silently discarded and the previous value stays displayed.
    pub fn edit_time(&mut self, id: RecordId, text: &str) -> bool {
        let Some(time) = timefmt::parse_wall_time(text, self.prefs.is_24_hour) else {
            return false;
        };
        self.apply_zone_time(id, time)
    }

    /// Fraction of the day (0..1) the entry's wall clock sits at, for the
    /// timeline cursor.
    pub fn timeline_position(&self, record: &TimezoneRecord) -> f64 {
        let time = self.zone_time(record).time();
        (time.hour() as u32 * 60 + time.minute() as u32) as f64 / MINUTES_PER_DAY
    }

    /// Sets the entry's wall clock from a timeline position, clamped to the
    /// day and floored to whole minutes.
    pub fn set_from_timeline(&mut self, id: RecordId, fraction: f64) -> bool {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let total = ((fraction * MINUTES_PER_DAY) as u32).min(24 * 60 - 1);
        let Ok(time) = Time::from_hms((total / 60) as u8, (total % 60) as u8, 0) else {
            return false;
        };
        self.apply_zone_time(id, time)
    }

    fn apply_zone_time(&mut self, id: RecordId, time: Time) -> bool {
        let Some(record) = self.entries.iter().find(|r| r.id() == id) else {
            return false;
        };
        let offset = record.offset();
        let local = self.clock.local_gmt_offset();
        let wall = self.instant.to_target_time(offset, local).replace_time(time);
        self.instant = wall.to_local_time(offset, local);
        true
    }

    /// The slug encoding the current selection.
    pub fn slug(&self) -> String {
        slug::encode(self.entries.iter().map(|r| r.query_id()))
    }

    /// The full converter path for the current state, query parameters
    /// included.
    pub fn current_path(&self) -> String {
        route::converter_path(&self.slug(), &self.prefs)
    }

    /// Replaces the selection from a URL slug, truncating to the cap.
    pub fn load_slug(&mut self, resolver: &mut Resolver, slug_str: &str) {
        let tokens = slug::decode(slug_str);
        let mut records = resolver.resolve(tokens);
        records.truncate(MAX_SELECTION);
        self.entries = records;
        self.drag = None;
    }

    /// Emits the collapsed pending navigation once the settle delay elapsed.
    pub fn poll_navigation(&mut self, now: Instant) -> Option<String> {
        self.nav.poll(now)
    }

    /// Emits any pending navigation immediately.
    pub fn flush_navigation(&mut self) -> Option<String> {
        self.nav.flush()
    }

    fn schedule_nav(&mut self, now: Instant) {
        let path = self.current_path();
        self.nav.schedule(path, now);
    }
}
