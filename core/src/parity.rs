// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::{WeekParity, week_monday};

/// How a calendar date is classified as an even or odd week.
///
/// The two rules disagree around years with 53 ISO weeks: under [`ParityRule::IsoWeek`]
/// week 53 and the following week 1 are both odd, while [`ParityRule::Alternating`] never
/// repeats a parity in consecutive weeks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "rule", rename_all = "kebab-case")]
pub enum ParityRule {
    /// Parity of the ISO 8601 week-of-year number.
    #[default]
    IsoWeek,

    /// Strict alternation counted from the week containing `anchor`, which has parity
    /// `anchor_parity`.
    Alternating {
        /// Any date of the reference week.
        anchor: Date,
        /// Parity of the reference week.
        anchor_parity: WeekParity,
    },
}

impl ParityRule {
    /// The week parity of the given date.
    pub fn parity_of(&self, date: Date) -> Result<WeekParity, jiff::Error> {
        match self {
            ParityRule::IsoWeek => {
                let week = date.iso_week_date().week();
                Ok(WeekParity::of_week_number(week.into()))
            }
            ParityRule::Alternating {
                anchor,
                anchor_parity,
            } => {
                let days = week_monday(*anchor)?.until(week_monday(date)?)?.get_days();
                let weeks = i64::from(days).div_euclid(7);
                Ok(match weeks.rem_euclid(2) {
                    0 => *anchor_parity,
                    _ => anchor_parity.flip(),
                })
            }
        }
    }
}
