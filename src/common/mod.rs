#[cfg(test)]
pub mod test_util;
pub mod trace;
pub mod try_as;

#[doc(hidden)]
#[macro_export]
macro_rules! noop {
    ($($tt:tt)*) => {};
}
