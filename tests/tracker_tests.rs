mod common;

use chrono::NaiveDate;
use common::{days_ago, pinned_tracker, today};
use daily_limit::{
    ledger::{DateWindow, Record},
    time::Clock,
    LimitError,
};

#[test]
fn today_stats_sum_only_todays_amounts() {
    let (mut tracker, _) = pinned_tracker(1000.0);
    let todays = [10.0, 145.0, 300.0, 10.16339999];
    for amount in todays {
        tracker.add_record(Record::on(amount, None, today()));
    }
    tracker.add_record(Record::on(999.0, None, days_ago(1)));

    assert_eq!(tracker.stats_today(), 465.16);
}

#[test]
fn week_boundaries() {
    let (mut tracker, _) = pinned_tracker(1000.0);
    tracker.add_record(Record::on(100.0, Some("eight days ago"), days_ago(8)));
    tracker.add_record(Record::on(50.0, Some("seven days ago"), days_ago(7)));
    tracker.add_record(Record::on(20.0, Some("six days ago"), days_ago(6)));
    tracker.add_record(Record::on(5.0, Some("today"), today()));

    assert_eq!(tracker.stats_week(), 25.0);
    assert_eq!(
        tracker.stats_in(DateWindow::trailing_week(today())),
        tracker.stats_week()
    );
}

#[test]
fn remainder_is_limit_minus_today() {
    let (mut tracker, _) = pinned_tracker(1000.0);
    let mut expected_spent = 0.0;
    for (i, amount) in [12.345, 0.005, 300.0, -20.5].into_iter().enumerate() {
        tracker.add_record(Record::on(amount, None, today()));
        expected_spent += amount;
        let spent = tracker.stats_today();
        assert_eq!(
            tracker.remainder_today(),
            daily_limit::utils::round_places(1000.0 - spent, 2),
            "after record {i}"
        );
    }
    assert!((tracker.stats_today() - expected_spent).abs() < 0.01);
}

#[test]
fn record_parses_dotted_dates_and_defaults_to_clock() {
    let (tracker, clock) = pinned_tracker(0.0);
    let record = Record::parse(10.0, None, Some("09.03.2021"), clock.as_ref()).unwrap();
    assert_eq!(record.date(), NaiveDate::from_ymd_opt(2021, 3, 9).unwrap());

    let undated = Record::parse(10.0, None, None, clock.as_ref()).unwrap();
    assert_eq!(undated.date(), tracker.today());
    assert_eq!(undated.date(), clock.today());
}

#[test]
fn malformed_date_is_a_parse_error() {
    let (_, clock) = pinned_tracker(0.0);
    let err = Record::parse(10.0, None, Some("2021/03/09"), clock.as_ref()).unwrap_err();
    assert!(matches!(err, LimitError::InvalidDate { .. }));
    assert!(err.to_string().contains("2021/03/09"));
}
