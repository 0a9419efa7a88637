use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Class names the card emits. Hosts map these onto their own stylesheet.
pub mod css {
    pub const ROOT: &str = "root";
    pub const ANCHOR: &str = "anchor";
    pub const CARD: &str = "card";
    pub const THREE_TO_TWO_WRAPPER: &str = "threeToTwoWrapper";
    pub const ASPECT_WRAPPER: &str = "aspectWrapper";
    pub const ROOT_FOR_IMAGE: &str = "rootForImage";
    pub const INFO: &str = "info";
    pub const PRICE: &str = "price";
    pub const NAME: &str = "name";
    pub const BORDER_RADIUS_INHERIT_TOP: &str = "borderRadiusInheritTop";
    pub const BORDER_RADIUS_INHERIT_BOTTOM: &str = "borderRadiusInheritBottom";
    pub const PAGINATION_INFO: &str = "paginationInfo";
    pub const PAGINATION_PREV: &str = "paginationPrev";
    pub const PAGINATION_PAGE: &str = "paginationPage";
    pub const PAGINATION_NEXT: &str = "paginationNext";
    pub const CARET_SHADOW: &str = "caretShadow";
    pub const CARET: &str = "caret";
    pub const CARET_WITH_CAROUSEL: &str = "caretWithCarousel";
}

/// An ordered, de-duplicated set of class names, composed `classnames`-style.
///
/// `Display` joins the names with single spaces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    names: Vec<Cow<'static, str>>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.push(name);
        self
    }

    pub fn with_if(self, name: &'static str, condition: bool) -> Self {
        if condition { self.with(name) } else { self }
    }

    /// Appends a caller-supplied class when present. Empty strings are ignored.
    pub fn with_opt(self, name: Option<&str>) -> Self {
        match name {
            Some(name) if !name.is_empty() => self.with(String::from(name)),
            _ => self,
        }
    }

    pub fn push(&mut self, name: impl Into<Cow<'static, str>>) {
        let name = name.into();
        if !name.is_empty() && !self.contains(&name) {
            self.names.push(name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|n| n.as_ref())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}
