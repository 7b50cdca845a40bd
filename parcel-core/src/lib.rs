//! Domain logic for the parcel explorer: the parcel registry, the
//! selection state machine, the responsive layout controller, the shape
//! style table and the detail panel renderer. Everything here is pure and
//! natively testable; browser wiring lives in `parcel-wasm`.

pub mod layout;
pub mod model;
pub mod panel;
pub mod registry;
pub mod selection;
pub mod style;

pub use layout::{COMPACT_BREAKPOINT_PX, LayoutMode, LayoutState, evaluate};
pub use model::{OilGasInfo, Parcel};
pub use registry::{ParcelRegistry, RegistryError};
pub use selection::Selection;
pub use style::{ShapeState, ShapeStyle, hover_state, restyle_pass, style_for};
