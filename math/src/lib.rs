pub mod error;
pub mod lagrange;
pub mod macros;
pub mod poly;
pub mod prelude;
pub mod radix;
pub mod rational;

pub use num_bigint;

pub use error::{MathError, Result};
pub use poly::Polynomial;
pub use radix::Radix;
pub use rational::Rational;
