//! Reconstruct a Shamir-shared secret from points whose y-values arrive as
//! digit strings in arbitrary bases.

pub mod dealer;
pub mod engine;
pub mod error;
pub mod params;
pub mod point;
pub mod point_set;
pub mod record;
pub mod traits;
pub mod utils;

pub use dealer::{split_secret, Dealer};
pub use engine::SecretReconstructor;
pub use error::{ErrorKind, ShamirError, ShamirResult};
pub use params::Threshold;
pub use point::Point;
pub use point_set::PointSet;
pub use record::{EncodedShare, RecordError, ShareRecord};
pub use traits::IntoPoint;
