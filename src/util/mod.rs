pub(crate) mod debug_assertions;

use crate::Less;

#[macro_export]
macro_rules! debug {
    ($($x:tt)*) => {
        {
            #[cfg(debug_assertions)]
            {
                std::println!("{:?}", $($x)*);
            }
        }
    };
}

/// Returns true if no element is less than its predecessor.
pub(crate) fn is_sorted_by_less<T, F>(v: &[T], is_less: &F) -> bool
where
    F: Less<T>,
{
    v.windows(2).all(|w| !is_less(&w[1], &w[0]))
}
