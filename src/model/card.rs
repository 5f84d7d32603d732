//! Feed card domain model.
//!
//! Cards are a closed union: every kind the feed can render is a variant of
//! [`CardContent`], dispatched by exhaustive pattern matching. Capabilities
//! (video playability, exposure tracking) derive from the variant, never
//! from runtime lookup tables.

use std::fmt;

use crate::model::CardId;

/// Reserved id for the transient load-more indicator card.
pub const LOADING_CARD_ID: &str = "loading_indicator";

// ===== CardKind =====

/// Field-less discriminant of a card, used where only the kind matters
/// (exposure registry metadata, debug overlay, logging).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CardKind {
    /// Plain text card.
    Text,
    /// Image card with caption.
    Image,
    /// Video card; the only kind eligible for autoplay.
    Video,
    /// Product card with name and price.
    Product,
    /// Transient load-more indicator.
    Loading,
}

impl CardKind {
    /// Whether cards of this kind participate in autoplay selection.
    pub fn is_video_capable(self) -> bool {
        matches!(self, CardKind::Video)
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CardKind::Text => "text",
            CardKind::Image => "image",
            CardKind::Video => "video",
            CardKind::Product => "product",
            CardKind::Loading => "loading",
        };
        write!(f, "{label}")
    }
}

// ===== CardSpan =====

/// Render layout class of a card in the staggered grid.
///
/// Used only by the layout engine; the exposure core never inspects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardSpan {
    /// Occupies one lane.
    #[default]
    Half,
    /// Spans every lane of the grid.
    Full,
}

// ===== CardContent =====

/// Kind-specific payload of a feed card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardContent {
    /// Plain text body.
    Text {
        /// Body text, wrapped by the layout engine at render width.
        body: String,
    },
    /// Image with a caption. Images render as placeholder art; the url is
    /// kept for display and for the pagination seed rewrite.
    Image {
        /// Source url (not fetched).
        url: String,
        /// Caption under the placeholder.
        caption: String,
    },
    /// Video with a caption. The only autoplay-eligible content.
    Video {
        /// Source url (not fetched).
        url: String,
        /// Caption under the placeholder.
        caption: String,
    },
    /// Product listing.
    Product {
        /// Product image url (not fetched).
        image_url: String,
        /// Product name.
        name: String,
        /// Display price, already formatted (e.g. "$29.99").
        price: String,
    },
    /// Load-more indicator; excluded from exposure tracking.
    Loading,
}

impl CardContent {
    /// The field-less discriminant for this content.
    pub fn kind(&self) -> CardKind {
        match self {
            CardContent::Text { .. } => CardKind::Text,
            CardContent::Image { .. } => CardKind::Image,
            CardContent::Video { .. } => CardKind::Video,
            CardContent::Product { .. } => CardKind::Product,
            CardContent::Loading => CardKind::Loading,
        }
    }
}

// ===== FeedCard =====

/// One card in the feed: identity, layout span, and kind-specific content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedCard {
    id: CardId,
    span: CardSpan,
    content: CardContent,
}

impl FeedCard {
    /// Create a card. The loading indicator has its own constructor.
    pub fn new(id: CardId, span: CardSpan, content: CardContent) -> Self {
        Self { id, span, content }
    }

    /// Create the transient load-more indicator card (always full span).
    pub fn loading() -> Self {
        Self {
            // Reserved id, cannot collide with fixture ids by convention.
            id: CardId::new(LOADING_CARD_ID).expect("literal id is non-empty"),
            span: CardSpan::Full,
            content: CardContent::Loading,
        }
    }

    /// Stable unique identity.
    pub fn id(&self) -> &CardId {
        &self.id
    }

    /// Layout span in the staggered grid.
    pub fn span(&self) -> CardSpan {
        self.span
    }

    /// Kind-specific payload.
    pub fn content(&self) -> &CardContent {
        &self.content
    }

    /// Field-less kind discriminant.
    pub fn kind(&self) -> CardKind {
        self.content.kind()
    }

    /// Whether this card is eligible for autoplay selection.
    pub fn is_video(&self) -> bool {
        self.kind().is_video_capable()
    }

    /// Whether this card participates in exposure tracking.
    ///
    /// Everything except the loading indicator is tracked.
    pub fn is_tracked(&self) -> bool {
        self.kind() != CardKind::Loading
    }

    /// Clone this card as the pagination copy for `(page, index)`:
    /// fresh derived id, and image-bearing urls reseeded so clones render
    /// distinctly.
    pub fn paged_clone(&self, page: usize, index: usize) -> Self {
        let id = self.id.paged(page, index);
        let content = match &self.content {
            CardContent::Image { url, caption } => CardContent::Image {
                url: reseed_url(url, page, index),
                caption: caption.clone(),
            },
            CardContent::Video { url, caption } => CardContent::Video {
                url: url.clone(),
                caption: caption.clone(),
            },
            CardContent::Product {
                image_url,
                name,
                price,
            } => CardContent::Product {
                image_url: reseed_url(image_url, page, index),
                name: name.clone(),
                price: price.clone(),
            },
            other => other.clone(),
        };
        Self {
            id,
            span: self.span,
            content,
        }
    }
}

/// Rewrite the seed segment of a picsum-style url (`.../seed/<seed>/...`)
/// so every pagination clone gets a distinct image. Urls without a seed
/// segment pass through unchanged.
fn reseed_url(url: &str, page: usize, index: usize) -> String {
    const MARKER: &str = "/seed/";
    match url.find(MARKER) {
        Some(pos) => {
            let seed_start = pos + MARKER.len();
            let rest = &url[seed_start..];
            let seed_end = rest.find('/').map(|i| seed_start + i).unwrap_or(url.len());
            format!(
                "{}{}_p{}i{}{}",
                &url[..seed_start],
                &url[seed_start..seed_end],
                page,
                index,
                &url[seed_end..]
            )
        }
        None => url.to_string(),
    }
}

// ===== Tests =====
