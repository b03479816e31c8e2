

macro_rules! ord_impl {
    ($class:ident, $vn:ident) => (

        impl PartialOrd for $class {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(std::cmp::Ord::cmp(self, other))
            }
        }

        impl Ord for $class {
            fn cmp(&self, other: &Self) -> Ordering {
                self.$vn.cmp(&other.$vn)
            }
        }

    )
}


macro_rules! compute_impl_checked {
    ($class:ident, $vn:ident, $vty:ty) => (

        impl Add for $class {
            type Output = $class;
            fn add(self, other: Self) -> Self {
                let v = self.$vn.checked_add(other.$vn).unwrap();
                Self::from(v)
            }
        }

        impl Sub for $class {
            type Output = $class;
            fn sub(self, other: Self) -> Self {
                let v = self.$vn.checked_sub(other.$vn).unwrap();
                Self::from(v)
            }
        }

        impl Add<$vty> for $class {
            type Output = $class;
            fn add(self, other: $vty) -> Self {
                let v = self.$vn.checked_add(other).unwrap();
                Self::from(v)
            }
        }

        impl Sub<$vty> for $class {
            type Output = $class;
            fn sub(self, other: $vty) -> Self {
                let v = self.$vn.checked_sub(other).unwrap();
                Self::from(v)
            }
        }

        impl AddAssign for $class {
            fn add_assign(&mut self, other: Self) {
                *self = *self + other;
            }
        }

        impl SubAssign for $class {
            fn sub_assign(&mut self, other: Self) {
                *self = *self - other;
            }
        }

        impl AddAssign<$vty> for $class {
            fn add_assign(&mut self, other: $vty) {
                *self = *self + other;
            }
        }

        impl SubAssign<$vty> for $class {
            fn sub_assign(&mut self, other: $vty) {
                *self = *self - other;
            }
        }

    )
}
