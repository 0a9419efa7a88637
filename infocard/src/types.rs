use alloc::string::String;
use alloc::vec::Vec;

/// A geographic coordinate in degrees.
///
/// Coordinates are passed through to the map host untouched; ranges are not validated.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// An amount of money in the currency's minor unit (e.g. cents).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Money {
    pub amount: i64,
    /// ISO 4217 code, e.g. `"USD"`.
    pub currency: String,
}

impl Money {
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}

/// Opaque listing identity (a UUID in most marketplaces).
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ListingId(pub String);

impl ListingId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ListingId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One named size variant of an image (e.g. `landscape-crop2x`).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageVariant {
    pub name: String,
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// A reference to a listing image and the variants the image service produced for it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageRef {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub variants: Vec<ImageVariant>,
}

impl ImageRef {
    pub fn variant(&self, name: &str) -> Option<&ImageVariant> {
        self.variants.iter().find(|v| v.name == name)
    }
}

/// A listing as delivered by the marketplace API.
///
/// Missing `price` and `images` deserialize to "absent" and "empty" respectively.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub price: Option<Money>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub images: Vec<ImageRef>,
    pub geolocation: LatLng,
}

impl Listing {
    pub fn new(id: impl Into<String>, title: impl Into<String>, geolocation: LatLng) -> Self {
        Self {
            id: ListingId::new(id),
            title: title.into(),
            price: None,
            images: Vec::new(),
            geolocation,
        }
    }

    pub fn with_price(mut self, price: Option<Money>) -> Self {
        self.price = price;
        self
    }

    pub fn with_images(mut self, images: Vec<ImageRef>) -> Self {
        self.images = images;
        self
    }

    pub fn first_image(&self) -> Option<&ImageRef> {
        self.images.first()
    }
}

/// Pixel displacement applied to an overlay element relative to its projected anchor point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelOffset {
    pub x: f64,
    pub y: f64,
}
