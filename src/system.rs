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

use crate::offset::GmtOffset;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Host clock access, abstracted so every time-dependent computation in this
/// crate is testable with a fixed clock.
pub trait Clock {
    /// The current instant in UTC.
    fn now_utc(&self) -> OffsetDateTime;

    /// The host's UTC offset, east-positive.
    fn local_offset(&self) -> UtcOffset;

    /// The current host-local wall clock as a naive date time.
    fn local_wall_clock(&self) -> PrimitiveDateTime {
        let now = self.now_utc().to_offset(self.local_offset());
        PrimitiveDateTime::new(now.date(), now.time())
    }

    /// The host offset as a [GmtOffset](crate::GmtOffset).
    fn local_gmt_offset(&self) -> GmtOffset {
        GmtOffset::from_minutes(self.local_offset().whole_minutes() as i32)
    }
}

/// The real host clock.
///
/// When the platform refuses to disclose the local offset (a soundness guard
/// of the time crate on some targets), UTC is assumed; the wall-clock
/// simulation stays internally consistent either way.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }

    fn local_offset(&self) -> UtcOffset {
        UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// A clock pinned to a fixed instant and offset.
    pub struct FixedClock {
        pub now: OffsetDateTime,
        pub offset: UtcOffset,
    }

    impl Clock for FixedClock {
        fn now_utc(&self) -> OffsetDateTime {
            self.now
        }

        fn local_offset(&self) -> UtcOffset {
            self.offset
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FixedClock;
    use super::*;
    use time::macros::{datetime, offset};

    #[test]
    fn system_clock_never_panics() {
        let clock = SystemClock;
        let _ = clock.local_wall_clock();
        let _ = clock.local_gmt_offset();
    }

    #[test]
    fn wall_clock_applies_local_offset() {
        let clock = FixedClock {
            now: datetime!(2024-06-01 12:00 UTC),
            offset: offset!(+5:30),
        };
        assert_eq!(clock.local_wall_clock(), datetime!(2024-06-01 17:30));
        assert_eq!(clock.local_gmt_offset().to_string(), "+05:30");
    }
}
