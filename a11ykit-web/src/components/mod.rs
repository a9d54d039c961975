pub mod panel;
pub mod toolbar;
pub mod widget;

pub use panel::Panel;
pub use toolbar::Toolbar;
pub use widget::Widget;

/// Value for `aria-pressed` on a toggle button.
#[must_use]
pub const fn pressed(on: bool) -> &'static str {
    if on { "true" } else { "false" }
}
