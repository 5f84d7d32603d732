//! Fixture JSON parsing.
//!
//! A fixture is an object mapping tab keys to arrays of card objects,
//! internally tagged by `"type"`. Parsing is graceful per card: malformed
//! entries are skipped with a warning, never a parse abort.

use serde::Deserialize;
use tracing::warn;

use crate::model::{CardContent, CardId, CardSpan, FeedCard, FeedError, FeedTab};

/// Raw card object as it appears in fixture JSON.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum RawCard {
    Text {
        id: String,
        body: String,
        #[serde(default)]
        full_width: bool,
    },
    Image {
        id: String,
        url: String,
        #[serde(default)]
        caption: String,
        #[serde(default)]
        full_width: bool,
    },
    Video {
        id: String,
        url: String,
        #[serde(default)]
        caption: String,
        #[serde(default)]
        full_width: bool,
    },
    Product {
        id: String,
        image_url: String,
        name: String,
        price: f64,
        #[serde(default)]
        full_width: bool,
    },
}

impl RawCard {
    /// Convert to the validated domain card. Error strings feed the
    /// skip-with-warning path.
    fn into_card(self) -> Result<FeedCard, String> {
        match self {
            RawCard::Text {
                id,
                body,
                full_width,
            } => Ok(FeedCard::new(
                validated_id(id)?,
                span(full_width),
                CardContent::Text { body },
            )),
            RawCard::Image {
                id,
                url,
                caption,
                full_width,
            } => Ok(FeedCard::new(
                validated_id(id)?,
                span(full_width),
                CardContent::Image { url, caption },
            )),
            RawCard::Video {
                id,
                url,
                caption,
                full_width,
            } => Ok(FeedCard::new(
                validated_id(id)?,
                span(full_width),
                CardContent::Video { url, caption },
            )),
            RawCard::Product {
                id,
                image_url,
                name,
                price,
                full_width,
            } => {
                if !price.is_finite() || price < 0.0 {
                    return Err(format!("invalid price {price}"));
                }
                Ok(FeedCard::new(
                    validated_id(id)?,
                    span(full_width),
                    CardContent::Product {
                        image_url,
                        name,
                        price: format!("${price:.2}"),
                    },
                ))
            }
        }
    }
}

fn validated_id(id: String) -> Result<CardId, String> {
    CardId::new(id).map_err(|e| e.to_string())
}

fn span(full_width: bool) -> CardSpan {
    if full_width {
        CardSpan::Full
    } else {
        CardSpan::Half
    }
}

/// Parse result: per-tab template lists plus the number of skipped entries.
#[derive(Debug)]
pub(crate) struct ParsedFixture {
    /// Template cards per tab, indexed by [`FeedTab::index`].
    pub(crate) templates: [Vec<FeedCard>; 5],
    /// Count of entries dropped by graceful skipping.
    pub(crate) skipped: usize,
}

/// Parse fixture JSON into per-tab template lists.
///
/// Structural failures (not a JSON object, zero parseable cards) return
/// [`FeedError::Parse`]; individual malformed cards, unknown card types,
/// duplicate ids within a tab, and unknown tab keys are skipped with a
/// warning.
pub(crate) fn parse_fixture(raw: &str) -> Result<ParsedFixture, FeedError> {
    let doc: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(raw).map_err(|e| FeedError::Parse {
            message: e.to_string(),
        })?;

    let mut templates: [Vec<FeedCard>; 5] = Default::default();
    let mut skipped = 0usize;

    for (key, value) in &doc {
        let Some(tab) = FeedTab::ALL
            .iter()
            .copied()
            .find(|t| t.fixture_key() == key)
        else {
            warn!(key = %key, "ignoring unknown tab key in fixture");
            continue;
        };
        let Some(entries) = value.as_array() else {
            warn!(tab = %tab, "fixture tab value is not an array, skipping tab");
            continue;
        };
        let list = &mut templates[tab.index()];
        for (index, entry) in entries.iter().enumerate() {
            match parse_card(entry) {
                Ok(card) if list.iter().any(|c| c.id() == card.id()) => {
                    warn!(tab = %tab, id = %card.id(), "skipping duplicate card id");
                    skipped += 1;
                }
                Ok(card) => list.push(card),
                Err(message) => {
                    warn!(tab = %tab, index, %message, "skipping malformed fixture card");
                    skipped += 1;
                }
            }
        }
    }

    if templates.iter().all(Vec::is_empty) {
        return Err(FeedError::Parse {
            message: "fixture contains no cards".to_string(),
        });
    }
    Ok(ParsedFixture { templates, skipped })
}

fn parse_card(value: &serde_json::Value) -> Result<FeedCard, String> {
    let raw: RawCard = serde_json::from_value(value.clone()).map_err(|e| e.to_string())?;
    raw.into_card()
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CardKind;

    fn tab_cards<'a>(parsed: &'a ParsedFixture, tab: FeedTab) -> &'a [FeedCard] {
        &parsed.templates[tab.index()]
    }

    #[test]
    fn parses_every_card_kind() {
        let raw = r#"{
            "all": [
                {"type": "text", "id": "t1", "body": "hello"},
                {"type": "image", "id": "i1", "url": "https://x/seed/a/1", "caption": "pic"},
                {"type": "video", "id": "v1", "url": "https://x/v.mp4", "caption": "clip"},
                {"type": "product", "id": "p1", "image_url": "https://x/seed/b/2", "name": "Mug", "price": 12.5}
            ]
        }"#;
        let parsed = parse_fixture(raw).unwrap();
        let cards = tab_cards(&parsed, FeedTab::All);
        assert_eq!(parsed.skipped, 0);
        let kinds: Vec<CardKind> = cards.iter().map(FeedCard::kind).collect();
        assert_eq!(
            kinds,
            vec![
                CardKind::Text,
                CardKind::Image,
                CardKind::Video,
                CardKind::Product
            ]
        );
    }

    #[test]
    fn formats_product_price_with_two_decimals() {
        let raw = r#"{"products": [
            {"type": "product", "id": "p1", "image_url": "u", "name": "Mug", "price": 12.5}
        ]}"#;
        let parsed = parse_fixture(raw).unwrap();
        match tab_cards(&parsed, FeedTab::Products)[0].content() {
            CardContent::Product { price, .. } => assert_eq!(price, "$12.50"),
            other => panic!("expected product, got {other:?}"),
        }
    }

    #[test]
    fn full_width_flag_maps_to_full_span() {
        let raw = r#"{"all": [
            {"type": "text", "id": "t1", "body": "wide", "full_width": true},
            {"type": "text", "id": "t2", "body": "narrow"}
        ]}"#;
        let parsed = parse_fixture(raw).unwrap();
        let cards = tab_cards(&parsed, FeedTab::All);
        assert_eq!(cards[0].span(), CardSpan::Full);
        assert_eq!(cards[1].span(), CardSpan::Half);
    }

    #[test]
    fn skips_malformed_entries_and_keeps_the_rest() {
        let raw = r#"{"all": [
            {"type": "text", "id": "t1", "body": "ok"},
            {"type": "text", "id": "t2"},
            {"type": "teleport", "id": "x1"},
            {"type": "text", "id": "t3", "body": "also ok"}
        ]}"#;
        let parsed = parse_fixture(raw).unwrap();
        let cards = tab_cards(&parsed, FeedTab::All);
        assert_eq!(parsed.skipped, 2);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id().as_str(), "t1");
        assert_eq!(cards[1].id().as_str(), "t3");
    }

    #[test]
    fn skips_cards_with_empty_ids() {
        let raw = r#"{"all": [
            {"type": "text", "id": "", "body": "nameless"},
            {"type": "text", "id": "t1", "body": "named"}
        ]}"#;
        let parsed = parse_fixture(raw).unwrap();
        assert_eq!(parsed.skipped, 1);
        assert_eq!(tab_cards(&parsed, FeedTab::All).len(), 1);
    }

    #[test]
    fn skips_products_with_invalid_prices() {
        let raw = r#"{"products": [
            {"type": "product", "id": "p1", "image_url": "u", "name": "Bad", "price": -3.0},
            {"type": "product", "id": "p2", "image_url": "u", "name": "Good", "price": 3.0}
        ]}"#;
        let parsed = parse_fixture(raw).unwrap();
        assert_eq!(parsed.skipped, 1);
        assert_eq!(tab_cards(&parsed, FeedTab::Products).len(), 1);
    }

    #[test]
    fn skips_duplicate_ids_within_a_tab() {
        let raw = r#"{"all": [
            {"type": "text", "id": "t1", "body": "first"},
            {"type": "text", "id": "t1", "body": "second"}
        ]}"#;
        let parsed = parse_fixture(raw).unwrap();
        assert_eq!(parsed.skipped, 1);
        let cards = tab_cards(&parsed, FeedTab::All);
        assert_eq!(cards.len(), 1);
        match cards[0].content() {
            CardContent::Text { body } => assert_eq!(body, "first"),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn same_id_may_appear_under_different_tabs() {
        let raw = r#"{
            "all": [{"type": "video", "id": "v1", "url": "u", "caption": "c"}],
            "videos": [{"type": "video", "id": "v1", "url": "u", "caption": "c"}]
        }"#;
        let parsed = parse_fixture(raw).unwrap();
        assert_eq!(parsed.skipped, 0);
        assert_eq!(tab_cards(&parsed, FeedTab::All).len(), 1);
        assert_eq!(tab_cards(&parsed, FeedTab::Videos).len(), 1);
    }

    #[test]
    fn ignores_unknown_tab_keys() {
        let raw = r#"{
            "trending": [{"type": "text", "id": "t1", "body": "x"}],
            "all": [{"type": "text", "id": "t2", "body": "y"}]
        }"#;
        let parsed = parse_fixture(raw).unwrap();
        assert_eq!(tab_cards(&parsed, FeedTab::All).len(), 1);
    }

    #[test]
    fn missing_tabs_yield_empty_template_lists() {
        let raw = r#"{"all": [{"type": "text", "id": "t1", "body": "x"}]}"#;
        let parsed = parse_fixture(raw).unwrap();
        assert!(tab_cards(&parsed, FeedTab::Products).is_empty());
    }

    #[test]
    fn non_object_document_is_a_parse_error() {
        assert!(matches!(
            parse_fixture("[1, 2, 3]"),
            Err(FeedError::Parse { .. })
        ));
        assert!(matches!(
            parse_fixture("not json"),
            Err(FeedError::Parse { .. })
        ));
    }

    #[test]
    fn fixture_without_any_cards_is_a_parse_error() {
        let err = parse_fixture("{}").unwrap_err();
        assert!(err.to_string().contains("no cards"));
    }

    #[test]
    fn non_array_tab_value_is_skipped() {
        let raw = r#"{
            "videos": {"type": "text", "id": "t0", "body": "not a list"},
            "all": [{"type": "text", "id": "t1", "body": "x"}]
        }"#;
        let parsed = parse_fixture(raw).unwrap();
        assert!(tab_cards(&parsed, FeedTab::Videos).is_empty());
        assert_eq!(tab_cards(&parsed, FeedTab::All).len(), 1);
    }
}
