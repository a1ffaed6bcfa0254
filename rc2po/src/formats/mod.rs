//! File formats handled by rc2po: Windows resource scripts in, gettext
//! catalogs out.

pub mod po;
pub mod rc;

// Reexporting the formats for easier access
pub use po::{DroppedTranslation, Format as PoFormat, Message};
pub use rc::Format as RcFormat;
