use std::{fmt, ops::RangeInclusive, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    errors::LimitError,
    time::{Clock, SystemClock},
};

/// Textual date format accepted for records.
pub const DATE_FORMAT: &str = "%d.%m.%Y";
/// Comment stored when none is supplied.
pub const DEFAULT_COMMENT: &str = "No comment";

/// A single dated consumption entry: money spent or calories eaten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    amount: f64,
    comment: String,
    date: NaiveDate,
}

impl Record {
    /// Creates a record for an explicit calendar date.
    pub fn on(amount: f64, comment: Option<&str>, date: NaiveDate) -> Self {
        Self {
            amount,
            comment: comment.unwrap_or(DEFAULT_COMMENT).to_string(),
            date,
        }
    }

    /// Creates a record dated with the clock's current day.
    pub fn new(amount: f64, comment: Option<&str>, clock: &dyn Clock) -> Self {
        Self::on(amount, comment, clock.today())
    }

    /// Creates a record from an optional `DD.MM.YYYY` date, falling back to today.
    pub fn parse(
        amount: f64,
        comment: Option<&str>,
        date: Option<&str>,
        clock: &dyn Clock,
    ) -> Result<Self, LimitError> {
        let date = match date {
            Some(text) => Self::parse_date(text)?,
            None => clock.today(),
        };
        Ok(Self::on(amount, comment, date))
    }

    /// Parses `DD.MM.YYYY`. Day and month take one or two digits, the year exactly four;
    /// signs and surrounding whitespace are rejected.
    pub fn parse_date(text: &str) -> Result<NaiveDate, LimitError> {
        let invalid = |source: Option<chrono::ParseError>| LimitError::InvalidDate {
            input: text.to_string(),
            source,
        };
        if !has_date_shape(text) {
            return Err(invalid(None));
        }
        NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|err| invalid(Some(err)))
    }

    /// Parses the `amount[@DD.MM.YYYY][:comment]` shorthand used on the command line.
    pub fn from_shorthand(input: &str, clock: &dyn Clock) -> Result<Self, LimitError> {
        let (head, comment) = match input.split_once(':') {
            Some((head, comment)) => (head, Some(comment)),
            None => (input, None),
        };
        let (amount, date) = match head.split_once('@') {
            Some((amount, date)) => (amount, Some(date)),
            None => (head, None),
        };
        let amount: f64 = amount
            .trim()
            .parse()
            .map_err(|_| LimitError::InvalidAmount(amount.trim().to_string()))?;
        Self::parse(amount, comment, date.map(str::trim), clock)
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

fn has_date_shape(text: &str) -> bool {
    let parts: Vec<&str> = text.split('.').collect();
    match parts.as_slice() {
        [day, month, year] => {
            is_digits(day, 1..=2) && is_digits(month, 1..=2) && is_digits(year, 4..=4)
        }
        _ => false,
    }
}

fn is_digits(part: &str, width: RangeInclusive<usize>) -> bool {
    width.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for Record {
    type Err = LimitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_shorthand(s, &SystemClock)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {:>10}  {}",
            self.date.format(DATE_FORMAT),
            self.amount,
            self.comment
        )
    }
}
