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

//! Wall-time display formats (`14:05` / `2:05 PM` / `Sat, Jun 1`) and the
//! matching lenient parsers for manual time entry.

use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Date, Time};

const TIME_24: &[FormatItem<'static>] = format_description!("[hour]:[minute]");
const TIME_12: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:none]:[minute] [period]");
const TIME_24_LENIENT: &[FormatItem<'static>] =
    format_description!("[hour padding:none]:[minute]");
const TIME_12_LENIENT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:none]:[minute] [period case_sensitive:false]");
const DATE_LINE: &[FormatItem<'static>] =
    format_description!("[weekday repr:short], [month repr:short] [day padding:none]");

/// Formats a wall time for display, `HH:MM` in 24-hour mode, `H:MM AM` in
/// 12-hour mode.
pub fn format_wall_time(time: Time, is_24_hour: bool) -> String {
    let items = if is_24_hour { TIME_24 } else { TIME_12 };
    time.format(items).unwrap_or_default()
}

/// Formats the date line shown under a card's time (`Sat, Jun 1`).
pub fn format_wall_date(date: Date) -> String {
    date.format(DATE_LINE).unwrap_or_default()
}

/// Parses a manually entered wall time. `None` means the edit is to be
/// discarded silently; no error surfaces to the user.
///
/// Accepts unpadded hours (`9:30`) and, in 12-hour mode, any period casing
/// (`2:05 pm`).
pub fn parse_wall_time(text: &str, is_24_hour: bool) -> Option<Time> {
    let text = text.trim();
    let items = if is_24_hour {
        TIME_24_LENIENT
    } else {
        TIME_12_LENIENT
    };
    Time::parse(text, items).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, time};

    #[test]
    fn format_24_hour() {
        assert_eq!(format_wall_time(time!(14:05), true), "14:05");
        assert_eq!(format_wall_time(time!(00:00), true), "00:00");
    }

    #[test]
    fn format_12_hour() {
        assert_eq!(format_wall_time(time!(14:05), false), "2:05 PM");
        assert_eq!(format_wall_time(time!(00:30), false), "12:30 AM");
        assert_eq!(format_wall_time(time!(12:00), false), "12:00 PM");
    }

    #[test]
    fn format_date_line() {
        assert_eq!(format_wall_date(date!(2024 - 06 - 01)), "Sat, Jun 1");
        assert_eq!(format_wall_date(date!(2024 - 12 - 25)), "Wed, Dec 25");
    }

    #[test]
    fn parse_24_hour() {
        assert_eq!(parse_wall_time("14:05", true), Some(time!(14:05)));
        assert_eq!(parse_wall_time("9:30", true), Some(time!(9:30)));
        assert_eq!(parse_wall_time(" 14:05 ", true), Some(time!(14:05)));
        assert_eq!(parse_wall_time("25:00", true), None);
        assert_eq!(parse_wall_time("2:05 PM", true), None);
        assert_eq!(parse_wall_time("nonsense", true), None);
    }

    #[test]
    fn parse_12_hour() {
        assert_eq!(parse_wall_time("2:05 PM", false), Some(time!(14:05)));
        assert_eq!(parse_wall_time("2:05 pm", false), Some(time!(14:05)));
        assert_eq!(parse_wall_time("12:30 AM", false), Some(time!(0:30)));
        assert_eq!(parse_wall_time("14:05", false), None);
        assert_eq!(parse_wall_time("", false), None);
    }
}
