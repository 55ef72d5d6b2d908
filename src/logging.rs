// Thin wrappers over the `log` facade. Without the `logging` feature they
// expand to nothing and `log` is not linked.

macro_rules! trace {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            ::log::trace!($($tt)*);
        }
    };
}

macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            ::log::debug!($($tt)*);
        }
    };
}

pub(crate) use debug;
pub(crate) use trace;
