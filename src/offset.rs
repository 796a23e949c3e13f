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

use nom::branch::alt;
use nom::bytes::complete::take_while_m_n;
use nom::character::complete::char as cchar;
use nom::combinator::{eof, map_res};
use nom::sequence::tuple;
use std::fmt::{Display, Formatter};
use thiserror::Error;
use time::{Duration, PrimitiveDateTime};

/// The error returned when a GMT offset string fails strict parsing.
#[derive(Debug, Error)]
pub enum OffsetParseError {
    /// A nom parsing error.
    #[error("nom error: {:?}", .0)]
    Nom(nom::error::ErrorKind),

    /// The string parsed but left trailing garbage.
    #[error("trailing characters after offset")]
    Trailing,
}

// Largest value representable in ±HH:MM.
const MAX_OFFSET_MINUTES: i32 = 99 * 60 + 59;

/// A fixed GMT offset, east-positive, in whole minutes.
///
/// The wire format shared with the UI layer is always `±HH:MM`, zero-padded
/// (`+05:30`, `-05:00`); [Display](Display) produces it and
/// [parse](GmtOffset::parse) consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GmtOffset {
    minutes: i32,
}

type PResult<'a, T> = nom::IResult<&'a str, T>;

fn sign(input: &str) -> PResult<char> {
    alt((cchar('+'), cchar('-')))(input)
}

fn two_digits(input: &str) -> PResult<i32> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_digit()),
        |v: &str| v.parse::<i32>(),
    )(input)
}

impl GmtOffset {
    /// The zero offset, `+00:00`.
    pub const UTC: GmtOffset = GmtOffset { minutes: 0 };

    /// Parses a strict `±HH:MM` offset string.
    ///
    /// # Arguments
    ///
    /// * `input`: the string to parse.
    ///
    /// returns: Result<GmtOffset, OffsetParseError>
    ///
    /// # Errors
    ///
    /// Returns an [OffsetParseError](OffsetParseError) if the string does not
    /// match `±HH:MM` exactly.
    pub fn parse(input: &str) -> Result<GmtOffset, OffsetParseError> {
        let (_, (sign, hh, _, mm, _)) = tuple((sign, two_digits, cchar(':'), two_digits, eof))(
            input,
        )
        .map_err(|e: nom::Err<nom::error::Error<&str>>| match e {
            nom::Err::Error(e) | nom::Err::Failure(e) => OffsetParseError::Nom(e.code),
            nom::Err::Incomplete(_) => OffsetParseError::Trailing,
        })?;
        let total = hh * 60 + mm;
        Ok(GmtOffset {
            minutes: if sign == '+' { total } else { -total },
        })
    }

    /// Parses a `±HH:MM` offset string, substituting the zero offset for
    /// anything malformed. Malformed offsets are a recoverable condition in
    /// this crate, never a hard failure.
    pub fn parse_lenient(input: &str) -> GmtOffset {
        match Self::parse(input) {
            Ok(v) => v,
            Err(e) => {
                log::debug!("malformed offset string `{}` treated as +00:00: {}", input, e);
                GmtOffset::UTC
            }
        }
    }

    /// Creates an offset from a signed second count (the catalog's `gmtOffset`
    /// field), truncating sub-minute precision toward zero.
    pub fn from_seconds(seconds: i64) -> GmtOffset {
        let minutes = (seconds / 60).clamp(
            -(MAX_OFFSET_MINUTES as i64),
            MAX_OFFSET_MINUTES as i64,
        ) as i32;
        GmtOffset { minutes }
    }

    /// Creates an offset from a signed minute count.
    pub fn from_minutes(minutes: i32) -> GmtOffset {
        GmtOffset {
            minutes: minutes.clamp(-MAX_OFFSET_MINUTES, MAX_OFFSET_MINUTES),
        }
    }

    /// Returns the signed whole-minute count of this offset (east-positive).
    pub fn whole_minutes(&self) -> i32 {
        self.minutes
    }
}

impl Display for GmtOffset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let abs = self.minutes.abs();
        write!(f, "{}{:02}:{:02}", sign, abs / 60, abs % 60)
    }
}

mod sealing {
    pub trait WallClockExt {}

    impl WallClockExt for time::PrimitiveDateTime {}
}

/// Wall-clock shifts between the host offset and a target offset.
///
/// These are simulations: the shifted value *displays* as the target zone's
/// local time while remaining a naive date time. No DST rule is consulted.
///
/// This trait is sealed and is only implemented in this library.
pub trait WallClockExt: sealing::WallClockExt {
    /// Shifts a host-local wall clock so it reads as `target`'s local time.
    ///
    /// # Arguments
    ///
    /// * `target`: the offset whose wall clock is wanted.
    /// * `local`: the host's own offset.
    fn to_target_time(&self, target: GmtOffset, local: GmtOffset) -> PrimitiveDateTime;

    /// Inverse of [to_target_time](WallClockExt::to_target_time): shifts a
    /// wall clock read in `source` back to the host's local wall clock.
    fn to_local_time(&self, source: GmtOffset, local: GmtOffset) -> PrimitiveDateTime;
}

impl WallClockExt for PrimitiveDateTime {
    fn to_target_time(&self, target: GmtOffset, local: GmtOffset) -> PrimitiveDateTime {
        self.saturating_add(Duration::minutes(
            (target.minutes - local.minutes) as i64,
        ))
    }

    fn to_local_time(&self, source: GmtOffset, local: GmtOffset) -> PrimitiveDateTime {
        self.saturating_add(Duration::minutes(
            (local.minutes - source.minutes) as i64,
        ))
    }
}
