//! Weekend office rule
//!
//! Office-supply claims dated on a Saturday or Sunday are atypical: supply
//! runs happen on working days. Expenses without a parseable date are left
//! alone rather than guessed at.

use crate::baseline::AmountBaseline;
use crate::models::ExpenseRecord;
use crate::rules::Rule;
use chrono::{Datelike, Weekday};

/// Category label this rule applies to
const OFFICE_CATEGORY: &str = "office";

pub struct WeekendOffice;

impl Rule for WeekendOffice {
    fn code(&self) -> &'static str {
        "weekend_office"
    }

    fn weight(&self) -> u32 {
        20
    }

    fn description(&self) -> &'static str {
        "Office-supply claim dated on a Saturday or Sunday"
    }

    fn triggers(&self, expense: &ExpenseRecord, _baseline: &AmountBaseline) -> bool {
        if expense.category != OFFICE_CATEGORY {
            return false;
        }
        match expense.date {
            Some(date) => matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
            None => false,
        }
    }
}
