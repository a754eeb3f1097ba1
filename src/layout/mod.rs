//! Layout selection and on-screen placement
//!
//! This module maps layout modes to the parameter profiles consumed by the
//! rendering widget, and positions the floating node detail card.

pub mod card_placement;
pub mod profiles;

pub use card_placement::{get_best_card_position, CardPlacement, Quadrant, DEFAULT_CARD_MARGIN};
pub use profiles::{
    get_layout_config, ForceOptions, GeometricOptions, HierarchicalOptions, LayoutMode, LayoutOptions,
    LayoutProfile, LAYOUT_PADDING,
};
