//! Checklist Keys
//!
//! Structured identities for checkboxes and price fields. The persisted
//! document stores them as opaque strings (`sched:Monday:3`, `grocPrice:7`),
//! so every key round-trips through `Display` / `FromStr` unchanged.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised checklist key: {0}")]
pub struct KeyParseError(pub String);

/// Identity of a single checkbox in `PersistedState::checks`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CheckKey {
    /// Schedule entry on a given day
    Schedule { day: String, index: usize },
    /// Grocery list item
    Grocery(usize),
    /// Entry in the SUPPLEMENTS list
    Supplement(usize),
    /// Entry in the SKINCARE list
    Skincare(usize),
    /// Exercise within a named workout
    Workout { name: String, index: usize },
}

impl CheckKey {
    pub fn schedule(day: impl Into<String>, index: usize) -> Self {
        CheckKey::Schedule { day: day.into(), index }
    }

    pub fn workout(name: impl Into<String>, index: usize) -> Self {
        CheckKey::Workout { name: name.into(), index }
    }
}

impl fmt::Display for CheckKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckKey::Schedule { day, index } => write!(f, "sched:{}:{}", day, index),
            CheckKey::Grocery(index) => write!(f, "groc:{}", index),
            CheckKey::Supplement(index) => write!(f, "supp:{}", index),
            CheckKey::Skincare(index) => write!(f, "skin:{}", index),
            CheckKey::Workout { name, index } => write!(f, "wk:{}:{}", name, index),
        }
    }
}

impl FromStr for CheckKey {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || KeyParseError(s.to_string());
        let (bucket, rest) = s.split_once(':').ok_or_else(err)?;

        match bucket {
            "groc" => parse_index(rest).map(CheckKey::Grocery).ok_or_else(err),
            "supp" => parse_index(rest).map(CheckKey::Supplement).ok_or_else(err),
            "skin" => parse_index(rest).map(CheckKey::Skincare).ok_or_else(err),
            // Names may themselves contain ':' so the index is split off the end
            "sched" | "wk" => {
                let (name, index) = rest.rsplit_once(':').ok_or_else(err)?;
                let index = parse_index(index).ok_or_else(err)?;
                Ok(if bucket == "sched" {
                    CheckKey::schedule(name, index)
                } else {
                    CheckKey::workout(name, index)
                })
            }
            _ => Err(err()),
        }
    }
}

/// Which price map a `PriceKey` lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceLedger {
    /// `groceryPrices`
    Grocery,
    /// `supplementPrices` (shared by supplements and skincare)
    Supplements,
}

/// Identity of a free-text price input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceKey {
    Grocery(usize),
    Supplement(usize),
    Skincare(usize),
}

impl PriceKey {
    pub fn ledger(&self) -> PriceLedger {
        match self {
            PriceKey::Grocery(_) => PriceLedger::Grocery,
            PriceKey::Supplement(_) | PriceKey::Skincare(_) => PriceLedger::Supplements,
        }
    }

    /// The checkbox that sits on the same row as this price input
    pub fn check_key(&self) -> CheckKey {
        match *self {
            PriceKey::Grocery(i) => CheckKey::Grocery(i),
            PriceKey::Supplement(i) => CheckKey::Supplement(i),
            PriceKey::Skincare(i) => CheckKey::Skincare(i),
        }
    }
}

impl fmt::Display for PriceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceKey::Grocery(index) => write!(f, "grocPrice:{}", index),
            PriceKey::Supplement(index) => write!(f, "suppPrice:{}", index),
            PriceKey::Skincare(index) => write!(f, "skinPrice:{}", index),
        }
    }
}

impl FromStr for PriceKey {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || KeyParseError(s.to_string());
        let (bucket, rest) = s.split_once(':').ok_or_else(err)?;
        let index = parse_index(rest).ok_or_else(err)?;

        match bucket {
            "grocPrice" => Ok(PriceKey::Grocery(index)),
            "suppPrice" => Ok(PriceKey::Supplement(index)),
            "skinPrice" => Ok(PriceKey::Skincare(index)),
            _ => Err(err()),
        }
    }
}

fn parse_index(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_key_strings() {
        assert_eq!(CheckKey::schedule("Monday", 3).to_string(), "sched:Monday:3");
        assert_eq!(CheckKey::Grocery(0).to_string(), "groc:0");
        assert_eq!(CheckKey::Supplement(12).to_string(), "supp:12");
        assert_eq!(CheckKey::Skincare(2).to_string(), "skin:2");
        assert_eq!(CheckKey::workout("Workout A", 4).to_string(), "wk:Workout A:4");
    }

    #[test]
    fn test_check_key_parse_names_with_colons() {
        let key: CheckKey = "sched:Day 1: Travel:2".parse().unwrap();
        assert_eq!(key, CheckKey::schedule("Day 1: Travel", 2));

        let key: CheckKey = "wk:Workout B:0".parse().unwrap();
        assert_eq!(key, CheckKey::workout("Workout B", 0));
    }

    #[test]
    fn test_check_key_rejects_garbage() {
        assert!("groc".parse::<CheckKey>().is_err());
        assert!("groc:x".parse::<CheckKey>().is_err());
        assert!("groc:-1".parse::<CheckKey>().is_err());
        assert!("sched:Monday".parse::<CheckKey>().is_err());
        assert!("other:1".parse::<CheckKey>().is_err());
    }

    #[test]
    fn test_price_key_ledger() {
        assert_eq!(PriceKey::Grocery(1).ledger(), PriceLedger::Grocery);
        assert_eq!(PriceKey::Supplement(1).ledger(), PriceLedger::Supplements);
        assert_eq!(PriceKey::Skincare(1).ledger(), PriceLedger::Supplements);
        assert_eq!(PriceKey::Skincare(3).check_key(), CheckKey::Skincare(3));
    }

    #[test]
    fn test_price_key_parse() {
        assert_eq!("grocPrice:23".parse::<PriceKey>().unwrap(), PriceKey::Grocery(23));
        assert_eq!("skinPrice:0".parse::<PriceKey>().unwrap(), PriceKey::Skincare(0));
        assert_eq!(PriceKey::Supplement(5).to_string(), "suppPrice:5");
        assert!("groc:1".parse::<PriceKey>().is_err());
    }
}
