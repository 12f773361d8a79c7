//! Shared UI components.

pub mod events;
pub mod launch;
pub mod layout;
pub mod lazy_view;
pub mod nav;
pub mod theme;

pub use events::{EventDetails, EventList};
pub use launch::Launch;
pub use layout::Frame;
pub use lazy_view::LazyView;
pub use nav::{Sidenav, Topnav};
pub use theme::ThemeSwitch;
