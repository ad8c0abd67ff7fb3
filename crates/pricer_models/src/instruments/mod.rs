//! Option contract inputs for the grid pricer.
//!
//! - [`OptionType`]: Call / Put with strict parsing
//! - [`GridAxis`]: scalar-or-vector spot, strike and volatility inputs
//! - [`OptionSpec`]: the full pricing request, with a builder

pub mod axis;
pub mod payoff;
pub mod vanilla;

pub use axis::GridAxis;
pub use payoff::OptionType;
pub use vanilla::{OptionSpec, OptionSpecBuilder};
