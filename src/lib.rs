//! Tracker - a keyed set of soft-deletable items ordered by logical time.
//!
//! # Quick Start
//!
//! ```
//! use tracker::Tracker;
//!
//! let mut items = Tracker::new();
//! items.add(0);
//! items.add(1);
//! items.delete(&0).unwrap();
//!
//! // Make the active set exactly {1, 2}
//! items.set_active_items([1, 2]);
//!
//! assert_eq!(items.active_items().copied().collect::<Vec<_>>(), vec![2, 1]);
//! assert_eq!(items.deleted_items().copied().collect::<Vec<_>>(), vec![0]);
//! ```

pub mod error;
pub mod logging;
pub mod tracker;

pub use error::{Result, TrackerError};
pub use tracker::{Keys, Reconciled, SharedTracker, Status, Timestamp, Tracker};
