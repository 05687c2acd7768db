macro_rules! uni {
    ($t:ty, $u:ty $(, $($b:tt)+)?) => {
        impl<T $(,$($b)+)?> PartialEq<$u> for $t
        where
            T: PartialEq,
        {
            fn eq(&self, other: &$u) -> bool {
                let other: &[T] = other.as_ref();
                $crate::AsSlice::as_slice(self).elements_eq(other)
            }
        }
    };
}

// The reverse direction would put the uncovered parameter T ahead of the
// first local type, which the orphan rules reject.
macro_rules! impl_for {
    ($t:ty) => {
        $crate::eq_impl::uni!($t, Vec<T>);
        $crate::eq_impl::uni!($t, [T]);
        $crate::eq_impl::uni!($t, &[T]);
        $crate::eq_impl::uni!($t, &mut [T]);
        $crate::eq_impl::uni!($t, [T; N], const N: usize);
        $crate::eq_impl::uni!($t, &[T; N], const N: usize);
        $crate::eq_impl::uni!($t, &mut [T; N], const N: usize);
        impl<T> Eq for $t where T: Eq {}
    };
}

pub(crate) use impl_for;
pub(crate) use uni;
