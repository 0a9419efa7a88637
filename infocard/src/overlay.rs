use crate::offset::{PixelOffsetFn, pixel_position_offset};
use crate::{LatLng, PixelOffset};

/// The map host pane an overlay is mounted into, bottom-most first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapPane {
    MapPane,
    OverlayLayer,
    MarkerLayer,
    OverlayMouseTarget,
    #[default]
    FloatPane,
}

/// Style overrides applied to the overlay's container element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlayStyle {
    pub z_index: i32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self { z_index: 1 }
    }
}

/// Everything the map host needs to place an overlay.
#[derive(Clone, Copy, Debug)]
pub struct OverlayProps {
    pub position: LatLng,
    pub pane: MapPane,
    /// Maps the element's measured `(width, height)` to its displacement from the projected point.
    pub offset: PixelOffsetFn,
    pub style: OverlayStyle,
}

impl OverlayProps {
    pub fn new(position: LatLng) -> Self {
        Self {
            position,
            pane: MapPane::default(),
            offset: pixel_position_offset,
            style: OverlayStyle::default(),
        }
    }

    pub fn with_pane(mut self, pane: MapPane) -> Self {
        self.pane = pane;
        self
    }

    pub fn with_offset(mut self, offset: PixelOffsetFn) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_style(mut self, style: OverlayStyle) -> Self {
        self.style = style;
        self
    }

    pub fn pixel_offset(&self, width: f64, height: f64) -> PixelOffset {
        (self.offset)(width, height)
    }
}

/// Arguments of one host draw cycle.
pub struct DrawRequest<'a, P, E> {
    pub panes: &'a P,
    pub element: &'a mut E,
    pub props: &'a OverlayProps,
}

impl<P, E> DrawRequest<'_, P, E> {
    pub fn pixel_offset(&self, width: f64, height: f64) -> PixelOffset {
        self.props.pixel_offset(width, height)
    }
}

/// The map host's positioned-overlay capability.
///
/// The host owns projection and pane lifecycle; `draw` is its default placement routine.
/// [`SafeOverlayAnchor`] only decides *whether* to call it.
pub trait Positionable {
    type Panes;
    type Element;
    type Error;

    /// Looks up the map's rendering panes. `None` while the map is not (or no longer) attached.
    fn panes(&self) -> Option<Self::Panes>;

    /// Projects `request.props.position`, applies the pixel offset and positions the element.
    fn draw(
        &mut self,
        request: DrawRequest<'_, Self::Panes, Self::Element>,
    ) -> Result<(), Self::Error>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkipReason {
    PanesUnavailable,
    ContainerMissing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawOutcome {
    Drawn,
    Skipped(SkipReason),
}

impl DrawOutcome {
    pub fn is_drawn(self) -> bool {
        matches!(self, Self::Drawn)
    }
}

/// An overlay that tolerates the host tearing down its panes before the overlay itself.
///
/// Each draw cycle re-checks that the host's panes exist and that this overlay's container element
/// is mounted; if either is missing the cycle is skipped. Host draw errors are returned unchanged.
#[derive(Clone, Debug)]
pub struct SafeOverlayAnchor<E> {
    props: OverlayProps,
    element: Option<E>,
}

impl<E> SafeOverlayAnchor<E> {
    pub fn new(props: OverlayProps) -> Self {
        Self {
            props,
            element: None,
        }
    }

    pub fn props(&self) -> &OverlayProps {
        &self.props
    }

    /// Replaces the placement; takes effect on the next draw cycle.
    pub fn set_props(&mut self, props: OverlayProps) {
        self.props = props;
    }

    /// Attaches the container element created by the host.
    pub fn mount(&mut self, element: E) {
        icdebug!(pane = ?self.props.pane, "SafeOverlayAnchor::mount");
        self.element = Some(element);
    }

    /// Detaches and returns the container element. Later draw cycles are skipped.
    pub fn unmount(&mut self) -> Option<E> {
        icdebug!(mounted = self.element.is_some(), "SafeOverlayAnchor::unmount");
        self.element.take()
    }

    pub fn is_mounted(&self) -> bool {
        self.element.is_some()
    }

    pub fn element(&self) -> Option<&E> {
        self.element.as_ref()
    }

    pub fn draw<H>(&mut self, host: &mut H) -> Result<DrawOutcome, H::Error>
    where
        H: Positionable<Element = E>,
    {
        let Some(panes) = host.panes() else {
            ictrace!("SafeOverlayAnchor::draw skipped: panes unavailable");
            return Ok(DrawOutcome::Skipped(SkipReason::PanesUnavailable));
        };
        let Some(element) = self.element.as_mut() else {
            ictrace!("SafeOverlayAnchor::draw skipped: container missing");
            return Ok(DrawOutcome::Skipped(SkipReason::ContainerMissing));
        };

        host.draw(DrawRequest {
            panes: &panes,
            element,
            props: &self.props,
        })?;
        Ok(DrawOutcome::Drawn)
    }
}
