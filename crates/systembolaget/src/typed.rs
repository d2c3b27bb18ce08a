//! Typed views over the raw text fields.
//!
//! Nothing here replaces the verbatim strings on [`Article`] and [`Store`];
//! each accessor parses on demand and returns `None` for empty or
//! unrecognised text.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::types::{Article, Articles, Store};

/// A store position in the RT90 national grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rt90 {
    pub x: Decimal,
    pub y: Decimal,
}

/// Parses a number written with either a decimal comma or a decimal point.
///
/// Spaces used as thousands separators are ignored.
#[must_use]
pub fn parse_decimal(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

/// Parses a `"YYYY-MM-DD"` date string into a [`NaiveDate`].
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

fn parse_flag(s: &str) -> bool {
    s.trim() == "1"
}

impl Article {
    #[must_use]
    pub fn price_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.price)
    }

    #[must_use]
    pub fn volume_ml_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.volume_ml)
    }

    #[must_use]
    pub fn price_per_litre_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.price_per_litre)
    }

    /// Alcohol by volume in percent; `"40.00%"` yields `40.00`.
    #[must_use]
    pub fn alcohol_percentage_decimal(&self) -> Option<Decimal> {
        let raw = self.alcohol_percentage.trim();
        parse_decimal(raw.strip_suffix('%').unwrap_or(raw))
    }

    #[must_use]
    pub fn sold_since_date(&self) -> Option<NaiveDate> {
        parse_date(&self.sold_since)
    }

    #[must_use]
    pub fn discontinued_since_date(&self) -> Option<NaiveDate> {
        parse_date(&self.discontinued_since)
    }

    #[must_use]
    pub fn is_organic(&self) -> bool {
        parse_flag(&self.organic)
    }

    #[must_use]
    pub fn is_kosher(&self) -> bool {
        parse_flag(&self.kosher)
    }
}

impl Articles {
    /// First article with the given article id.
    #[must_use]
    pub fn find_by_article_id(&self, article_id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.article_id == article_id)
    }

    /// Every variant sharing `product_number`, in document order.
    #[must_use]
    pub fn by_product_number(&self, product_number: &str) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| a.product_number == product_number)
            .collect()
    }
}

impl Store {
    /// Non-empty address lines, in order.
    #[must_use]
    pub fn address_lines(&self) -> Vec<&str> {
        [
            &self.address1,
            &self.address2,
            &self.address3,
            &self.address4,
            &self.address5,
        ]
        .into_iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect()
    }

    /// Search keywords split on `;`.
    #[must_use]
    pub fn keywords(&self) -> Vec<&str> {
        self.search_words
            .split(';')
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .collect()
    }

    /// Both RT90 coordinates, when present and numeric.
    #[must_use]
    pub fn rt90(&self) -> Option<Rt90> {
        Some(Rt90 {
            x: parse_decimal(&self.rt90_x)?,
            y: parse_decimal(&self.rt90_y)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn parse_decimal_accepts_comma_and_point() {
        assert_eq!(parse_decimal("229,00"), Some(dec("229.00")));
        assert_eq!(parse_decimal("229.00"), Some(dec("229.00")));
        assert_eq!(parse_decimal(" 1 299,50 "), Some(dec("1299.50")));
    }

    #[test]
    fn parse_decimal_rejects_empty_and_garbage() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("   "), None);
        assert_eq!(parse_decimal("ca 200"), None);
    }

    #[test]
    fn parse_date_handles_iso_dates_only() {
        assert_eq!(
            parse_date("1993-10-01"),
            NaiveDate::from_ymd_opt(1993, 10, 1)
        );
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2015"), None);
    }

    #[test]
    fn article_accessors_parse_raw_text() {
        let article = Article {
            price: "229,00".to_string(),
            volume_ml: "700,00".to_string(),
            price_per_litre: "327,14".to_string(),
            alcohol_percentage: "40.00%".to_string(),
            sold_since: "1993-10-01".to_string(),
            organic: "1".to_string(),
            kosher: "0".to_string(),
            ..Article::default()
        };

        assert_eq!(article.price_decimal(), Some(dec("229.00")));
        assert_eq!(article.volume_ml_decimal(), Some(dec("700")));
        assert_eq!(article.price_per_litre_decimal(), Some(dec("327.14")));
        assert_eq!(article.alcohol_percentage_decimal(), Some(dec("40")));
        assert_eq!(
            article.sold_since_date(),
            NaiveDate::from_ymd_opt(1993, 10, 1)
        );
        assert_eq!(article.discontinued_since_date(), None);
        assert!(article.is_organic());
        assert!(!article.is_kosher());
        // raw text is untouched
        assert_eq!(article.price, "229,00");
    }

    #[test]
    fn empty_article_has_no_typed_values() {
        let article = Article::default();
        assert_eq!(article.price_decimal(), None);
        assert_eq!(article.alcohol_percentage_decimal(), None);
        assert_eq!(article.sold_since_date(), None);
        assert!(!article.is_organic());
    }

    #[test]
    fn articles_lookup_by_ids() {
        let catalog = Articles {
            articles: vec![
                Article {
                    article_id: "1".to_string(),
                    product_number: "74248".to_string(),
                    vintage: "2007".to_string(),
                    ..Article::default()
                },
                Article {
                    article_id: "2".to_string(),
                    product_number: "101".to_string(),
                    ..Article::default()
                },
                Article {
                    article_id: "3".to_string(),
                    product_number: "74248".to_string(),
                    vintage: "2008".to_string(),
                    ..Article::default()
                },
            ],
            ..Articles::default()
        };

        assert_eq!(
            catalog.find_by_article_id("2").map(|a| a.product_number.as_str()),
            Some("101")
        );
        assert!(catalog.find_by_article_id("99").is_none());

        let vintages: Vec<&str> = catalog
            .by_product_number("74248")
            .into_iter()
            .map(|a| a.vintage.as_str())
            .collect();
        assert_eq!(vintages, ["2007", "2008"]);
    }

    #[test]
    fn store_address_lines_skip_blanks() {
        let store = Store {
            address1: "Fleminggatan 68".to_string(),
            address3: "112 45".to_string(),
            address4: "STOCKHOLM".to_string(),
            address5: "  ".to_string(),
            ..Store::default()
        };
        assert_eq!(
            store.address_lines(),
            ["Fleminggatan 68", "112 45", "STOCKHOLM"]
        );
    }

    #[test]
    fn store_search_words_split_on_semicolon() {
        let store = Store {
            search_words: "Kungsholmen;Fridhemsplan;;STOCKHOLM;".to_string(),
            ..Store::default()
        };
        assert_eq!(
            store.keywords(),
            ["Kungsholmen", "Fridhemsplan", "STOCKHOLM"]
        );
    }

    #[test]
    fn store_rt90_requires_both_coordinates() {
        let mut store = Store {
            rt90_x: "6581508".to_string(),
            rt90_y: "1626620".to_string(),
            ..Store::default()
        };
        assert_eq!(
            store.rt90(),
            Some(Rt90 {
                x: dec("6581508"),
                y: dec("1626620"),
            })
        );

        store.rt90_y.clear();
        assert_eq!(store.rt90(), None);
    }
}
