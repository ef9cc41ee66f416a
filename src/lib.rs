#![forbid(unsafe_code)]

mod bigint;
mod clock;
mod error;
mod random;
mod rational;

pub use bigint::BigInt;
pub use clock::ElapsedMillis;
pub use error::Error;
pub use random::RandomSource;
pub use rational::{facade, Rational};

pub type Result<T> = core::result::Result<T, Error>;
