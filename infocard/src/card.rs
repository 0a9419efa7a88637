use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use crate::classes::{ClassList, css};
use crate::{EventResult, ImageRef, InfoCardConfig, Listing, ListingId, Money, MoneyFormatter};

/// Rendered price of a listing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PriceText {
    /// Formatter output for a price in the display currency.
    Formatted(String),
    /// The bare currency code of a price in any other currency. No amount is shown.
    CurrencyCode(String),
}

impl PriceText {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Formatted(s) | Self::CurrencyCode(s) => s,
        }
    }

    /// Chooses between the formatted amount and the currency-code fallback.
    pub fn for_price(
        price: &Money,
        config: &InfoCardConfig,
        formatter: &impl MoneyFormatter,
    ) -> Self {
        if price.currency == config.display_currency {
            Self::Formatted(formatter.format_money(price.amount, &price.currency, &config.locale))
        } else {
            Self::CurrencyCode(price.currency.clone())
        }
    }
}

/// Input of the external responsive-image component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageProps {
    /// `None` asks the image component for its placeholder.
    pub image: Option<ImageRef>,
    pub alt: String,
    pub no_image_message: String,
    pub variants: Vec<String>,
    pub sizes: String,
    pub root_class: ClassList,
}

impl ImageProps {
    /// `srcset` built from the requested variants the image actually has.
    ///
    /// Returns `None` for the placeholder or when none of the variants exist.
    pub fn src_set(&self) -> Option<String> {
        let image = self.image.as_ref()?;
        let mut out = String::new();
        for variant in self.variants.iter().filter_map(|name| image.variant(name)) {
            if !out.is_empty() {
                out.push_str(", ");
            }
            let _ = write!(out, "{} {}w", variant.url, variant.width);
        }
        (!out.is_empty()).then_some(out)
    }
}

/// Render data of a single listing: a link wrapping the image, price and title.
///
/// The link keeps a real `href` but native activation is always claimed; see [`Self::click`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingCardView {
    pub listing_id: ListingId,
    pub href: String,
    pub alt: String,
    pub title: String,
    /// `None` when the listing has no price.
    pub price: Option<PriceText>,
    pub image: ImageProps,
    pub anchor_class: ClassList,
    pub card_class: ClassList,
    pub image_wrapper_class: ClassList,
    pub aspect_wrapper_class: ClassList,
    pub info_class: ClassList,
    pub price_class: ClassList,
    pub name_class: ClassList,
}

impl ListingCardView {
    /// Renders `listing` linking to `href`.
    ///
    /// The top corners are always rounded. The bottom corners are rounded only outside a
    /// carousel, where no pagination strip sits below the card.
    pub fn render(
        listing: &Listing,
        href: String,
        in_carousel: bool,
        class_name: Option<&str>,
        config: &InfoCardConfig,
        formatter: &impl MoneyFormatter,
    ) -> Self {
        let round_bottom = !in_carousel;

        Self {
            listing_id: listing.id.clone(),
            href,
            alt: listing.title.clone(),
            title: listing.title.clone(),
            price: listing
                .price
                .as_ref()
                .map(|price| PriceText::for_price(price, config, formatter)),
            image: ImageProps {
                image: listing.first_image().cloned(),
                alt: listing.title.clone(),
                no_image_message: config.no_image_message.clone(),
                variants: config.image_variants.clone(),
                sizes: config.image_sizes.clone(),
                root_class: ClassList::new()
                    .with(css::ROOT_FOR_IMAGE)
                    .with(css::BORDER_RADIUS_INHERIT_TOP),
            },
            anchor_class: ClassList::new()
                .with(css::ANCHOR)
                .with(css::BORDER_RADIUS_INHERIT_TOP)
                .with_if(css::BORDER_RADIUS_INHERIT_BOTTOM, round_bottom)
                .with_opt(class_name),
            card_class: ClassList::new()
                .with(css::CARD)
                .with(css::BORDER_RADIUS_INHERIT_TOP)
                .with_if(css::BORDER_RADIUS_INHERIT_BOTTOM, round_bottom),
            image_wrapper_class: ClassList::new()
                .with(css::THREE_TO_TWO_WRAPPER)
                .with(css::BORDER_RADIUS_INHERIT_TOP),
            aspect_wrapper_class: ClassList::new()
                .with(css::ASPECT_WRAPPER)
                .with(css::BORDER_RADIUS_INHERIT_TOP),
            info_class: ClassList::new()
                .with(css::INFO)
                .with_if(css::BORDER_RADIUS_INHERIT_BOTTOM, round_bottom),
            price_class: ClassList::new().with(css::PRICE),
            name_class: ClassList::new().with(css::NAME),
        }
    }

    pub fn price_str(&self) -> Option<&str> {
        self.price.as_ref().map(PriceText::as_str)
    }

    /// Handles activation of the card link: passes `href` to `handler` and claims the event, so
    /// the host never follows the link natively.
    pub fn click(&self, handler: impl FnOnce(&str)) -> EventResult {
        handler(&self.href);
        EventResult::Claimed
    }
}
