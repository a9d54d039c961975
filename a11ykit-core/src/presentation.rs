//! Presentation adapter seam.
//!
//! The manager never names CSS classes or style properties. It asks the
//! adapter to switch an [`Effect`] on or off, or to set a [`StyleProperty`],
//! and the platform decides what that means on the page.
use std::fmt;

use crate::text::HoverTarget;

/// Named visual modes that are either on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    HighContrast,
    CvdRedGreen,
    CvdGeneral,
    EasyUsability,
}

impl Effect {
    pub const ALL: [Self; 4] = [
        Self::HighContrast,
        Self::CvdRedGreen,
        Self::CvdGeneral,
        Self::EasyUsability,
    ];
}

/// Numeric style values the manager drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    /// Root font size, in percent.
    FontScale,
    /// Page zoom factor.
    PageScale,
}

/// Callback invoked by the adapter for every pointer-hover event.
pub type HoverHandler = Box<dyn Fn(HoverTarget)>;

/// Proof that a hover listener is attached.
///
/// Not `Clone`. A listener is detached by handing its token back to
/// [`Presentation::unsubscribe_hover`].
#[derive(PartialEq, Eq, Hash)]
#[must_use = "dropping a hover subscription leaks the listener"]
pub struct HoverSubscription {
    id: u64,
}

impl HoverSubscription {
    /// Mint a token for a listener the adapter registered under `id`.
    pub const fn new(id: u64) -> Self {
        Self { id }
    }

    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }
}

impl fmt::Debug for HoverSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HoverSubscription(#{})", self.id)
    }
}

/// Page-side capabilities consumed by [`crate::A11yManager`].
pub trait Presentation {
    /// Switch a named visual mode on or off on the page root.
    fn set_effect(&mut self, effect: Effect, on: bool);

    /// Set a numeric style value on the page root.
    fn set_style(&mut self, property: StyleProperty, value: f64);

    /// Visible text of the whole page.
    fn page_text(&self) -> String;

    /// Attach a pointer-hover listener.
    fn subscribe_hover(&mut self, handler: HoverHandler) -> HoverSubscription;

    /// Detach the listener identified by `subscription`.
    fn unsubscribe_hover(&mut self, subscription: HoverSubscription);
}
