use crate::domain::model::{Item, Receipt};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const ITEM_PAIR_POINTS: u64 = 5;
const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;
const AFTERNOON_HOUR: u32 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    RetailerName,
    RoundDollarTotal,
    QuarterMultipleTotal,
    ItemPairs,
    DescriptionLength,
    OddPurchaseDay,
    AfternoonPurchase,
}

impl Rule {
    pub fn label(&self) -> &'static str {
        match self {
            Rule::RetailerName => "Retailer name",
            Rule::RoundDollarTotal => "Round dollar total",
            Rule::QuarterMultipleTotal => "Total multiple of 0.25",
            Rule::ItemPairs => "Item pairs",
            Rule::DescriptionLength => "Description length",
            Rule::OddPurchaseDay => "Odd purchase day",
            Rule::AfternoonPurchase => "Afternoon purchase",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleContribution {
    pub rule: Rule,
    pub points: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub points: u64,
    /// Only rules that awarded something, in evaluation order.
    pub breakdown: Vec<RuleContribution>,
}

impl ScoreResult {
    pub fn points_for(&self, rule: Rule) -> u64 {
        self.breakdown
            .iter()
            .filter(|c| c.rule == rule)
            .map(|c| c.points)
            .sum()
    }
}

/// Total points for a receipt. Never fails: a field that does not parse only
/// zeroes the rules that depend on it.
pub fn score(receipt: &Receipt) -> u64 {
    calculate_points(receipt).points
}

pub fn calculate_points(receipt: &Receipt) -> ScoreResult {
    let total = parse_amount(&receipt.total);

    let contributions = [
        (Rule::RetailerName, retailer_points(&receipt.retailer)),
        (Rule::RoundDollarTotal, total.map_or(0, round_dollar_points)),
        (
            Rule::QuarterMultipleTotal,
            total.map_or(0, quarter_multiple_points),
        ),
        (Rule::ItemPairs, item_pair_points(&receipt.items)),
        (Rule::DescriptionLength, description_points(&receipt.items)),
        (Rule::OddPurchaseDay, odd_day_points(&receipt.purchase_date)),
        (
            Rule::AfternoonPurchase,
            afternoon_points(&receipt.purchase_time),
        ),
    ];

    let mut points: u64 = 0;
    let mut breakdown = Vec::new();
    for (rule, awarded) in contributions {
        if awarded > 0 {
            points = points.saturating_add(awarded);
            breakdown.push(RuleContribution {
                rule,
                points: awarded,
            });
        }
    }

    ScoreResult { points, breakdown }
}

/// No trimming: surrounding whitespace is a parse failure.
fn parse_amount(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `0` in `layout` stands for one ASCII digit, anything else must match exactly.
/// chrono alone accepts single-digit fields and leading whitespace.
fn has_layout(s: &str, layout: &str) -> bool {
    s.len() == layout.len()
        && s.bytes().zip(layout.bytes()).all(|(c, l)| match l {
            b'0' => c.is_ascii_digit(),
            _ => c == l,
        })
}

fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_ascii_alphanumeric()).count() as u64
}

fn round_dollar_points(total: f64) -> u64 {
    if total.fract() == 0.0 {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

fn quarter_multiple_points(total: f64) -> u64 {
    if total % 0.25 == 0.0 {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

fn item_pair_points(items: &[Item]) -> u64 {
    (items.len() / 2) as u64 * ITEM_PAIR_POINTS
}

fn description_points(items: &[Item]) -> u64 {
    items
        .iter()
        .map(single_description_points)
        .fold(0, u64::saturating_add)
}

fn single_description_points(item: &Item) -> u64 {
    // Byte length of the trimmed text, same as character count for ASCII.
    if item.short_description.trim().len() % 3 != 0 {
        return 0;
    }
    match parse_amount(&item.price) {
        // Float-to-int `as` saturates: negatives land on 0, huge prices on u64::MAX.
        Some(price) => (price * DESCRIPTION_PRICE_MULTIPLIER).ceil() as u64,
        None => 0,
    }
}

fn odd_day_points(purchase_date: &str) -> u64 {
    if !has_layout(purchase_date, "0000-00-00") {
        return 0;
    }
    match NaiveDate::parse_from_str(purchase_date, "%Y-%m-%d") {
        Ok(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
        _ => 0,
    }
}

/// 2:00pm through 2:59pm. 3pm and later do not count.
fn afternoon_points(purchase_time: &str) -> u64 {
    if !has_layout(purchase_time, "00:00") {
        return 0;
    }
    match NaiveTime::parse_from_str(purchase_time, "%H:%M") {
        Ok(time) if time.hour() == AFTERNOON_HOUR => AFTERNOON_POINTS,
        _ => 0,
    }
}
