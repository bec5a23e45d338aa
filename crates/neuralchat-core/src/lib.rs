//! Scroll-synchronised animation state and site content for the NeuralChat
//! landing page. Nothing here touches a renderer: the app feeds scroll
//! offsets in and reads `DerivedState` back out.

pub mod actions;
pub mod content;
pub mod decode;
pub mod derive;
pub mod driver;
pub mod engine;
pub mod error;
pub mod marker;
pub mod smoothing;
pub mod tracker;
pub mod zone;

pub use content::{ContentRegistry, SectionName};
pub use decode::DecodeText;
pub use derive::{DerivedState, ZonePhase, ZoneTransition};
pub use driver::ScrollDriver;
pub use engine::{ScrollSyncEngine, ZoneHandle};
pub use error::SyncError;
pub use marker::ZoneGeometry;
pub use tracker::ObservationHandle;
pub use zone::{DerivationKind, ProgressSample, RowDirection, ZoneConfig};
