//! Booster selection and once-only presentation policy.
//!
//! A booster is a promotional or onboarding card. Given a validated catalog,
//! the set of booster ids the user has already seen and a dev-mode flag, the
//! [`BoosterManager`] picks at most one booster, hands it to a presentation
//! surface and reports the user's answer back as a typed [`UserAction`].
//!
//! No file or database I/O — persistence is behind the [`ViewStateStore`] trait.

pub mod action;
pub mod booster;
pub mod catalog;
pub mod manager;
pub mod selection;
pub mod view_config;
pub mod view_state;

pub use action::{SurfaceResponse, UserAction};
pub use booster::Booster;
pub use catalog::{Catalog, CatalogError, parse_catalog};
pub use manager::{BoosterManager, Phase, PresentationSurface, ShowOutcome};
pub use selection::select_next;
pub use view_config::{CustomView, Detent, ViewConfiguration, ViewConfigurations};
pub use view_state::{MemoryViewState, ViewStateError, ViewStateStore, reset_viewed};
