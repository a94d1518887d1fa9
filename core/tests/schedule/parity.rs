// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::date;
use lessonbook_core::{DayOfWeek, ParityRule, Schedule, WeekParity};

use crate::common::{TestConfigBuilder, slot};

async fn open_with(rule: ParityRule, today: jiff::civil::Date) -> Schedule {
    let config = TestConfigBuilder::new().with_parity(rule).build();
    Schedule::open(config, today).await.unwrap()
}

#[tokio::test]
async fn parity_iso_week_repeats_odd_across_53_week_year() {
    // 2026 has 53 ISO weeks: 2026-12-28 is week 53, 2027-01-04 is week 1
    let schedule = open_with(ParityRule::IsoWeek, date(2027, 1, 1)).await;

    assert_eq!(schedule.parity_of(date(2026, 12, 28)).unwrap(), WeekParity::Odd);
    assert_eq!(schedule.parity_of(date(2027, 1, 4)).unwrap(), WeekParity::Odd);

    schedule
        .set_template(
            WeekParity::Odd,
            &[slot(WeekParity::Odd, DayOfWeek::MONDAY, 1, "Math", "Smith", "201")],
        )
        .await
        .unwrap();
    assert_eq!(schedule.lessons_for_date(date(2026, 12, 28)).await.unwrap().len(), 1);
    assert_eq!(schedule.lessons_for_date(date(2027, 1, 4)).await.unwrap().len(), 1);
}

#[tokio::test]
async fn parity_alternating_flips_across_53_week_year() {
    let rule = ParityRule::Alternating {
        anchor: date(2026, 12, 28),
        anchor_parity: WeekParity::Odd,
    };
    let schedule = open_with(rule, date(2027, 1, 1)).await;

    assert_eq!(schedule.parity_of(date(2026, 12, 28)).unwrap(), WeekParity::Odd);
    assert_eq!(schedule.parity_of(date(2027, 1, 4)).unwrap(), WeekParity::Even);

    schedule
        .set_template(
            WeekParity::Odd,
            &[slot(WeekParity::Odd, DayOfWeek::MONDAY, 1, "Math", "Smith", "201")],
        )
        .await
        .unwrap();
    assert_eq!(schedule.lessons_for_date(date(2026, 12, 28)).await.unwrap().len(), 1);
    assert!(schedule.lessons_for_date(date(2027, 1, 4)).await.unwrap().is_empty());
}
