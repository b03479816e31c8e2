

macro_rules! uint_define {
    ($class:ident, $size:expr, $numlen:expr, $vty:ty ) => {

        #[derive(Default, Debug, Hash, Copy, Clone, PartialEq, Eq)]
        pub struct $class {
            value: $vty,
        }

        impl Display for $class {
            fn fmt(&self, f: &mut Formatter) -> Result {
                write!(f, "{}", self.value)
            }
        }

        impl Deref for $class {
            type Target = $vty;
            fn deref(&self) -> &$vty {
                &self.value
            }
        }

        ord_impl!{$class, value}
        compute_impl_checked!{$class, value, $vty}

        impl Parse for $class {
            fn parse(&mut self, buf: &[u8]) -> Ret<usize> {
                let bts = bufeat_ref(buf, $size)?;
                let mut full = [0u8; $numlen];
                let start = $numlen - $size;
                full[start..].copy_from_slice(bts);
                self.value = <$vty>::from_be_bytes(full);
                Ok($size)
            }
        }

        impl Serialize for $class {
            fn serialize(&self) -> Vec<u8> {
                self.to_bytes().to_vec()
            }
            fn size(&self) -> usize {
                $size
            }
        }

        impl_field_only_new!{$class}

        impl $class {

            pub const MAX: $vty = maybe!($size == $numlen,
                <$vty>::MAX,
                ((1u128 << ($size * 8)) - 1) as $vty
            );
            pub const SIZE: usize = $size as usize;

            pub const fn from(v: $vty) -> Self {
                if v > Self::MAX {
                    panic!(concat!(stringify!($class), " overflow: value exceeds MAX"))
                }
                Self{ value: v }
            }

            pub fn from_usize(v: usize) -> Ret<Self> {
                if (v as u128) > (Self::MAX as u128) {
                    return errf!("{} value {} overflow max {}", stringify!($class), v, Self::MAX)
                }
                Ok(Self{ value: v as $vty })
            }

            pub fn uint(&self) -> $vty {
                self.value
            }

            pub fn to_vec(&self) -> Vec<u8> {
                self.to_bytes().into()
            }

            pub fn to_bytes(&self) -> [u8; $size] {
                if self.value > Self::MAX {
                    never!()
                }
                let mut real = [0u8; $size];
                let bts = <$vty>::to_be_bytes(self.value);
                for x in 1 ..= $size {
                    real[$size-x] = bts[$numlen-x];
                }
                real
            }

        }

    };
}


/*
* define
*/
uint_define!{Uint1, 1, 1, u8}
uint_define!{Uint2, 2, 2, u16}
uint_define!{Uint3, 3, 4, u32}
uint_define!{Uint4, 4, 4, u32}
uint_define!{Uint5, 5, 8, u64}
uint_define!{Uint8, 8, 8, u64}
