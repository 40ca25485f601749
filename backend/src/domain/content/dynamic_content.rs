//! Dynamic-content items and their per-locale variants.
//!
//! Ticket-field titles may carry a `{{dc.NAME}}` placeholder instead of
//! literal text; form assembly swaps the placeholder for the content of the
//! variant matching the request locale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::locale::Locale;

/// A dynamic-content item with every stored variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicContentItem {
    pub id: i64,
    pub url: String,
    pub name: String,
    pub placeholder: String,
    pub default_locale_id: i64,
    pub outdated: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub variants: Vec<DynamicContentVariant>,
}

/// One localised rendering of a dynamic-content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicContentVariant {
    pub id: i64,
    pub url: String,
    pub content: String,
    pub locale_id: i64,
    pub outdated: bool,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DynamicContentItem {
    /// Pick the variant for a request locale.
    ///
    /// Prefers the variant whose numeric locale id matches the request,
    /// falling back to the item's default locale. Variants without a real id
    /// are treated as absent. Returns `None` when neither locale has a
    /// usable variant.
    pub fn variant_for(&self, locale: Locale) -> Option<&DynamicContentVariant> {
        self.variant_by_locale_id(locale.dynamic_content_locale_id())
            .or_else(|| self.variant_by_locale_id(self.default_locale_id))
    }

    fn variant_by_locale_id(&self, locale_id: i64) -> Option<&DynamicContentVariant> {
        self.variants
            .iter()
            .find(|variant| variant.locale_id == locale_id && variant.id != 0)
    }

    /// Whether `text` is a `{{...}}` placeholder rather than literal copy.
    pub fn is_placeholder(text: &str) -> bool {
        text.starts_with("{{") && text.ends_with("}}")
    }
}

#[cfg(test)]
mod tests {
    //! Variant selection and fallback coverage.

    use chrono::TimeZone;
    use rstest::rstest;

    use super::*;

    fn variant(id: i64, locale_id: i64, content: &str) -> DynamicContentVariant {
        DynamicContentVariant {
            id,
            url: String::new(),
            content: content.to_owned(),
            locale_id,
            outdated: false,
            active: true,
            created_at: Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn order_number_item() -> DynamicContentItem {
        DynamicContentItem {
            id: 42,
            url: String::new(),
            name: "form_order_number_field".to_owned(),
            placeholder: "{{dc.form_order_number_field}}".to_owned(),
            default_locale_id: Locale::EnUs.dynamic_content_locale_id(),
            outdated: false,
            created_at: Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap(),
            variants: vec![
                variant(901, Locale::ZhTw.dynamic_content_locale_id(), "訂單號碼"),
                variant(902, Locale::EnUs.dynamic_content_locale_id(), "Order Number"),
            ],
        }
    }

    #[rstest]
    #[case(Locale::ZhTw, "訂單號碼")]
    #[case(Locale::EnUs, "Order Number")]
    #[case(Locale::Id, "Order Number")]
    fn resolves_request_locale_then_default(#[case] locale: Locale, #[case] expected: &str) {
        let item = order_number_item();
        let picked = item.variant_for(locale).expect("variant");
        assert_eq!(picked.content, expected);
    }

    #[rstest]
    fn missing_default_yields_none() {
        let mut item = order_number_item();
        item.variants.retain(|v| v.locale_id == Locale::ZhTw.dynamic_content_locale_id());
        assert!(item.variant_for(Locale::Ja).is_none());
    }

    #[rstest]
    fn zero_id_variants_are_ignored() {
        let mut item = order_number_item();
        for v in &mut item.variants {
            v.id = 0;
        }
        assert!(item.variant_for(Locale::ZhTw).is_none());
    }

    #[rstest]
    #[case("{{dc.form_order_number_field}}", true)]
    #[case("Order Number", false)]
    #[case("{{dc.unclosed", false)]
    fn placeholder_detection(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(DynamicContentItem::is_placeholder(text), expected);
    }
}
