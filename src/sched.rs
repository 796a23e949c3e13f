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

//! Cooperative timing primitives. Everything here is single-threaded and
//! explicitly polled with caller-supplied [Instant](Instant)s: the UI event
//! loop calls `poll`/`fire` on its cadence, tests drive time by hand.

use std::time::{Duration, Instant};

/// Recommended debounce for free-text search input.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Refresh period of the per-candidate clock preview while a result list is
/// open.
pub const REFRESH_PERIOD: Duration = Duration::from_secs(60);

/// Settle delay collapsing rapid selection mutations into one navigation.
pub const NAV_SETTLE: Duration = Duration::from_millis(300);

/// A trailing-edge debouncer: every [poke](Debouncer::poke) re-arms the
/// deadline and [fire](Debouncer::fire) reports true exactly once after the
/// input settles. A fire scheduled by a stale poke is ignored once
/// [cancel](Debouncer::cancel)led.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Debouncer {
        Debouncer {
            delay,
            deadline: None,
        }
    }

    /// Records an input event, pushing the deadline out by the full delay.
    pub fn poke(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// True exactly once per settled deadline.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drops any armed deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}

/// A fixed-period poll gate, the scoped-resource form of a refresh interval:
/// started when the owning surface opens, dropped when it closes. The first
/// poll after start fires immediately, then once per period.
#[derive(Debug)]
pub struct RefreshTask {
    period: Duration,
    next: Instant,
}

impl RefreshTask {
    pub fn start(period: Duration, now: Instant) -> RefreshTask {
        RefreshTask { period, next: now }
    }

    /// True when a refresh is due; rescheduling is from the poll time, so a
    /// late poll does not produce a burst of catch-up fires.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now >= self.next {
            self.next = now + self.period;
            true
        } else {
            false
        }
    }
}

/// Pending navigation buffer: rapid successive state changes overwrite the
/// pending path and re-arm the settle timer, so a burst of mutations
/// collapses into a single navigation.
#[derive(Debug)]
pub struct NavBatcher {
    settle: Duration,
    pending: Option<String>,
    deadline: Option<Instant>,
}

impl NavBatcher {
    pub fn new(settle: Duration) -> NavBatcher {
        NavBatcher {
            settle,
            pending: None,
            deadline: None,
        }
    }

    /// Registers the path the next navigation should go to, replacing any
    /// previously pending one.
    pub fn schedule(&mut self, path: String, now: Instant) {
        self.pending = Some(path);
        self.deadline = Some(now + self.settle);
    }

    /// Emits the collapsed navigation once the settle delay has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.pending.take()
            }
            _ => None,
        }
    }

    /// The explicit "update now" path: emits immediately if anything is
    /// pending.
    pub fn flush(&mut self) -> Option<String> {
        self.deadline = None;
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
