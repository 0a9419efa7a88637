/// Outcome of offering an input event to an affordance.
///
/// `Claimed` means the affordance handled the event: the host must suppress the native default
/// action (e.g. following an `<a href>`) and must not propagate the event to enclosing handlers.
/// `Bubbled` leaves both to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventResult {
    Claimed,
    Bubbled,
}

impl EventResult {
    pub fn is_claimed(self) -> bool {
        matches!(self, Self::Claimed)
    }

    /// Whether the host should cancel its native default action.
    pub fn prevents_default(self) -> bool {
        self.is_claimed()
    }

    /// Whether the host should stop dispatching to enclosing handlers.
    pub fn stops_propagation(self) -> bool {
        self.is_claimed()
    }
}

/// The part of a rendered info card a click landed on, innermost first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClickTarget {
    /// The listing card link (image, price or title).
    Card,
    PreviousPage,
    NextPage,
    /// Caret, caret shadow, or the pagination strip outside its buttons.
    Decoration,
}
