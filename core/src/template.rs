// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use crate::{DayOfWeek, PeriodNumber, WeekParity};

/// A recurring lesson assignment for one (day, period) of one week parity.
///
/// A blank subject means "no lesson" and is kept as a row, so that clearing a lesson is
/// representable.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TemplateSlot {
    pub parity: WeekParity,
    pub day: DayOfWeek,
    pub period: PeriodNumber,
    pub subject: String,
    pub teacher: String,
    pub room: String,
}

impl TemplateSlot {
    /// A slot with no lesson.
    pub fn blank(parity: WeekParity, day: DayOfWeek, period: PeriodNumber) -> Self {
        TemplateSlot {
            parity,
            day,
            period,
            subject: String::new(),
            teacher: String::new(),
            room: String::new(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.subject.trim().is_empty()
    }

    fn key(&self) -> (DayOfWeek, PeriodNumber) {
        (self.day, self.period)
    }
}

/// The editor view of one parity's template: one slot for every day and period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekTemplate {
    parity: WeekParity,
    slots: BTreeMap<(DayOfWeek, PeriodNumber), TemplateSlot>,
}

impl WeekTemplate {
    /// Completes the stored slots into the full 6 × 8 grid.
    ///
    /// Gaps become blank slots; if a (day, period) appears more than once, the first one wins.
    /// Slots of the other parity are ignored.
    pub fn complete(parity: WeekParity, stored: impl IntoIterator<Item = TemplateSlot>) -> Self {
        let mut slots = BTreeMap::new();
        for slot in stored.into_iter().filter(|s| s.parity == parity) {
            slots.entry(slot.key()).or_insert(slot);
        }

        for day in DayOfWeek::all() {
            for period in PeriodNumber::all() {
                slots
                    .entry((day, period))
                    .or_insert_with(|| TemplateSlot::blank(parity, day, period));
            }
        }

        WeekTemplate { parity, slots }
    }

    pub fn parity(&self) -> WeekParity {
        self.parity
    }

    pub fn get(&self, day: DayOfWeek, period: PeriodNumber) -> Option<&TemplateSlot> {
        self.slots.get(&(day, period))
    }

    /// Slots of one day, ordered by period.
    pub fn day(&self, day: DayOfWeek) -> impl Iterator<Item = &TemplateSlot> {
        self.slots.values().filter(move |s| s.day == day)
    }

    /// Sets subject, teacher and room of one slot.
    pub fn set(
        &mut self,
        day: DayOfWeek,
        period: PeriodNumber,
        subject: impl Into<String>,
        teacher: impl Into<String>,
        room: impl Into<String>,
    ) {
        let slot = TemplateSlot {
            parity: self.parity,
            day,
            period,
            subject: subject.into(),
            teacher: teacher.into(),
            room: room.into(),
        };
        self.slots.insert((day, period), slot);
    }

    /// Blanks one slot.
    pub fn clear(&mut self, day: DayOfWeek, period: PeriodNumber) {
        self.slots
            .insert((day, period), TemplateSlot::blank(self.parity, day, period));
    }

    /// Whether any slot carries a lesson.
    pub fn has_lessons(&self) -> bool {
        self.slots.values().any(|s| !s.is_blank())
    }

    /// All 48 slots ordered by (day, period), ready for `replace_template`.
    pub fn into_slots(self) -> Vec<TemplateSlot> {
        self.slots.into_values().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateSlot> {
        self.slots.values()
    }
}
