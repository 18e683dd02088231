//! Error handling primitives for the LIS2HH12 driver.

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Any error reported by the underlying bus interface.
    Interface(E),
    /// The WHO_AM_I register did not contain the expected value.
    DeviceIdMismatch,
    /// CTRL4 reported the reserved full-scale bit pattern.
    InvalidFullScale,
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Interface(err)
    }
}
