use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::{MapPane, OverlayStyle};

/// Marketplace-wide settings for rendering info cards.
///
/// `Default` matches a typical single-currency marketplace (USD, English). Use the `with_*`
/// setters to adjust individual fields.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InfoCardConfig {
    /// Only prices in this currency are formatted; others show their bare currency code.
    pub display_currency: String,
    pub locale: String,
    /// Shown by the image component when a listing has no images.
    pub no_image_message: String,
    /// Named image variants requested from the image component, smallest first.
    pub image_variants: Vec<String>,
    /// Value for the image's `sizes` attribute.
    pub image_sizes: String,
    pub pane: MapPane,
    pub style: OverlayStyle,
}

impl Default for InfoCardConfig {
    fn default() -> Self {
        Self {
            display_currency: String::from("USD"),
            locale: String::from("en"),
            no_image_message: String::from("No image"),
            image_variants: vec![
                String::from("landscape-crop"),
                String::from("landscape-crop2x"),
            ],
            image_sizes: String::from("250px"),
            pane: MapPane::FloatPane,
            style: OverlayStyle::default(),
        }
    }
}

impl InfoCardConfig {
    pub fn with_display_currency(mut self, currency: impl Into<String>) -> Self {
        self.display_currency = currency.into();
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_no_image_message(mut self, message: impl Into<String>) -> Self {
        self.no_image_message = message.into();
        self
    }

    pub fn with_image_variants(mut self, variants: impl IntoIterator<Item = String>) -> Self {
        self.image_variants = variants.into_iter().collect();
        self
    }

    pub fn with_image_sizes(mut self, sizes: impl Into<String>) -> Self {
        self.image_sizes = sizes.into();
        self
    }

    pub fn with_pane(mut self, pane: MapPane) -> Self {
        self.pane = pane;
        self
    }

    pub fn with_style(mut self, style: OverlayStyle) -> Self {
        self.style = style;
        self
    }
}
