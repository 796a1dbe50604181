#![warn(clippy::pedantic)]

pub mod constants;
pub mod error;
pub mod field;
pub mod kind;
pub mod layout;
pub mod layouts;
pub mod registry;
pub mod units;
pub mod value;

pub use error::TypeError;
pub use field::{Field, ScalarType};
pub use kind::RecordKind;
pub use layout::{Layout, LayoutField};
pub use registry::{Registry, RegistryEntry, registry};
pub use units::units_of;
pub use value::Value;
