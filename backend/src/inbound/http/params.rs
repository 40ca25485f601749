//! Query and path parameter validation for the read endpoints.
//!
//! Every read endpoint shares one vocabulary: `country_code`, `locale`,
//! `page`, `per_page`, `sort_by` and `sort_order`. Constrained parameters
//! reject unknown values and default when absent. Numeric parameters keep
//! the original wire contract: an unparseable `page` or `per_page` falls
//! back to its default, while a parsed value below the minimum is rejected.
//! Numbers therefore arrive as raw strings and are parsed here, not by the
//! extractor, so a malformed value never bypasses that contract.

use serde::Deserialize;
use serde_json::json;

use crate::domain::Error;
use crate::domain::content::{Country, ListingQuery, Locale, SortBy, SortOrder};

pub(crate) const DEFAULT_PER_PAGE: i64 = 30;
pub(crate) const MAX_PER_PAGE: i64 = 100;

/// Raw query parameters shared by the read endpoints.
///
/// `label_names` is only meaningful on the category-articles listing; other
/// endpoints ignore it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadQuery {
    pub country_code: Option<String>,
    pub locale: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub label_names: Option<String>,
}

impl ReadQuery {
    /// Validate the full listing vocabulary.
    ///
    /// Single-entity endpoints call this too: a request carrying an unknown
    /// sort key is rejected even where the sort is unused.
    pub fn listing(&self) -> Result<ListingQuery, Error> {
        Ok(ListingQuery {
            country: self.country()?,
            locale: self.locale()?,
            page: self.page()?,
            per_page: self.per_page()?,
            sort_by: self.sort_by()?,
            sort_order: self.sort_order()?,
        })
    }

    /// Comma-separated label filter, with empty segments dropped.
    pub fn labels(&self) -> Vec<String> {
        self.label_names
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .filter(|label| !label.is_empty())
            .map(str::to_owned)
            .collect()
    }

    fn country(&self) -> Result<Country, Error> {
        parse_constrained(self.country_code.as_deref(), "country_code")
    }

    fn locale(&self) -> Result<Locale, Error> {
        parse_constrained(self.locale.as_deref(), "locale")
    }

    fn sort_by(&self) -> Result<SortBy, Error> {
        parse_constrained(self.sort_by.as_deref(), "sort_by")
    }

    fn sort_order(&self) -> Result<SortOrder, Error> {
        parse_constrained(self.sort_order.as_deref(), "sort_order")
    }

    fn per_page(&self) -> Result<i64, Error> {
        let per_page = match self.per_page.as_deref() {
            Some(raw) => match raw.parse::<i64>() {
                Ok(value) => value,
                Err(_) => DEFAULT_PER_PAGE,
            },
            None => DEFAULT_PER_PAGE,
        };
        if per_page < 1 {
            return Err(below_minimum("per_page", per_page, 1));
        }
        Ok(per_page.min(MAX_PER_PAGE))
    }

    fn page(&self) -> Result<i64, Error> {
        let page = match self.page.as_deref() {
            Some(raw) => raw.parse::<i64>().unwrap_or(1),
            None => 1,
        };
        if page < 1 {
            return Err(below_minimum("page", page, 1));
        }
        Ok(page)
    }
}

/// Parse a numeric path segment, rejecting anything that is not a
/// non-negative integer.
pub(crate) fn parse_id(raw: &str, field: &'static str) -> Result<i64, Error> {
    raw.parse::<u64>()
        .ok()
        .and_then(|value| i64::try_from(value).ok())
        .ok_or_else(|| {
            Error::invalid_attribute(format!("{field} '{raw}' is not a valid identifier"))
                .with_details(json!({ "field": field, "value": raw }))
        })
}

fn parse_constrained<T>(raw: Option<&str>, field: &'static str) -> Result<T, Error>
where
    T: Default + std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None | Some("") => Ok(T::default()),
        Some(value) => value.parse().map_err(|err: T::Err| {
            Error::invalid_attribute(err.to_string())
                .with_details(json!({ "field": field, "value": value }))
        }),
    }
}

fn below_minimum(field: &'static str, value: i64, minimum: i64) -> Error {
    Error::invalid_attribute(format!("{field} {value} is below the minimum of {minimum}"))
        .with_details(json!({ "field": field, "value": value }))
}

#[cfg(test)]
mod tests {
    //! Unit tests for the read parameter contract.

    use rstest::rstest;

    use crate::domain::ErrorKind;

    use super::*;

    fn query(pairs: &[(&str, &str)]) -> ReadQuery {
        let mut query = ReadQuery::default();
        for (key, value) in pairs {
            let slot = match *key {
                "country_code" => &mut query.country_code,
                "locale" => &mut query.locale,
                "page" => &mut query.page,
                "per_page" => &mut query.per_page,
                "sort_by" => &mut query.sort_by,
                "sort_order" => &mut query.sort_order,
                "label_names" => &mut query.label_names,
                other => panic!("unknown query key {other}"),
            };
            *slot = Some((*value).to_owned());
        }
        query
    }

    #[rstest]
    fn empty_query_yields_the_documented_defaults() {
        let listing = query(&[]).listing().expect("defaults validate");
        assert_eq!(listing, ListingQuery::default());
    }

    #[rstest]
    fn blank_values_fall_back_like_absent_ones() {
        let listing = query(&[("country_code", ""), ("locale", ""), ("sort_by", "")])
            .listing()
            .expect("blank values validate");
        assert_eq!(listing.country, Country::Sg);
        assert_eq!(listing.locale, Locale::EnUs);
        assert_eq!(listing.sort_by, SortBy::Position);
    }

    #[rstest]
    #[case("country_code", "uk")]
    #[case("locale", "fr")]
    #[case("sort_by", "rank")]
    #[case("sort_order", "sideways")]
    fn unknown_vocabulary_is_an_invalid_attribute(#[case] key: &'static str, #[case] value: &str) {
        let error = query(&[(key, value)])
            .listing()
            .expect_err("unknown value rejected");
        assert_eq!(error.kind, ErrorKind::InvalidAttribute);
        let details = error.details.expect("details attached");
        assert_eq!(details["field"], key);
        assert_eq!(details["value"], value);
    }

    #[rstest]
    fn unparseable_per_page_falls_back_to_the_default() {
        let listing = query(&[("per_page", "plenty")])
            .listing()
            .expect("fallback applies");
        assert_eq!(listing.per_page, DEFAULT_PER_PAGE);
    }

    #[rstest]
    fn oversized_per_page_clamps_to_the_maximum() {
        let listing = query(&[("per_page", "500")])
            .listing()
            .expect("clamp applies");
        assert_eq!(listing.per_page, MAX_PER_PAGE);
    }

    #[rstest]
    #[case("0")]
    #[case("-3")]
    fn per_page_below_one_is_rejected(#[case] value: &str) {
        let error = query(&[("per_page", value)])
            .listing()
            .expect_err("below minimum rejected");
        assert_eq!(error.kind, ErrorKind::InvalidAttribute);
    }

    #[rstest]
    fn unparseable_page_falls_back_to_the_first_page() {
        let listing = query(&[("page", "first")])
            .listing()
            .expect("fallback applies");
        assert_eq!(listing.page, 1);
    }

    #[rstest]
    fn page_below_one_is_rejected() {
        let error = query(&[("page", "0")])
            .listing()
            .expect_err("below minimum rejected");
        assert_eq!(error.kind, ErrorKind::InvalidAttribute);
    }

    #[rstest]
    fn labels_split_on_commas_and_drop_empty_segments() {
        let labels = query(&[("label_names", "delivery,,billing,")]).labels();
        assert_eq!(labels, vec!["delivery".to_owned(), "billing".to_owned()]);
    }

    #[rstest]
    fn absent_labels_are_an_empty_filter() {
        assert!(query(&[]).labels().is_empty());
    }

    #[rstest]
    fn ids_parse_as_non_negative_integers() {
        assert_eq!(parse_id("360000123", "article_id").expect("valid id"), 360_000_123);
    }

    #[rstest]
    #[case("abc")]
    #[case("-7")]
    #[case("12.5")]
    #[case("")]
    fn malformed_ids_are_invalid_attributes(#[case] raw: &str) {
        let error = parse_id(raw, "article_id").expect_err("malformed id rejected");
        assert_eq!(error.kind, ErrorKind::InvalidAttribute);
        assert_eq!(error.details.expect("details")["field"], "article_id");
    }
}
