//! Dashboard UI components
//!
//! Modular Leptos components for the surveillance dashboard.
//!
//! The component hierarchy follows a layered design:
//!
//! 1. **Primitives** (`primitives.rs`) - Low-level reusable building blocks:
//!    `LoadingSpinner`, `StatusDot`, `ErrorBanner`
//! 2. **Icons** (`icons.rs`) - Inline SVG icon components, air-gapped
//! 3. **Layout** (`header.rs`) - Structural components
//! 4. **Widgets** (`video_feed.rs`, `stats_panel.rs`, `stat_card.rs`,
//!    `legend.rs`, `theme_toggle.rs`) - The dashboard's working parts
//!
//! All components include ARIA attributes for screen reader support.

pub mod header;
pub mod icons;
pub mod legend;
pub mod primitives;
pub mod stat_card;
pub mod stats_panel;
pub mod theme_toggle;
pub mod video_feed;

// Re-export layout and widget components
pub use header::Header;
pub use legend::DetectionLegend;
pub use stat_card::StatCard;
pub use stats_panel::StatsPanel;
pub use theme_toggle::ThemeToggle;
pub use video_feed::VideoFeed;

// Re-export primitives for convenient access
pub use primitives::{ErrorBanner, LoadingSpinner, StatusDot};
