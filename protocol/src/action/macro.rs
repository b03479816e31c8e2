
#[macro_export]
macro_rules! action_define {
    ($class:ident, $kid:expr, $burn90:expr, $reqsign:expr,
        { $( $item:ident : $ty:ty )* },
        ($aself:ident, $actx:ident), $apply:block, $revert:block
    ) => {

        #[derive(Default, Debug, Clone, PartialEq, Eq)]
        pub struct $class {
            kind: Uint2,
            $(
                pub $item: $ty,
            )*
        }

        impl Parse for $class {
            fn parse(&mut self, buf: &[u8]) -> Ret<usize> {
                let mut mv = self.kind.parse(&buf)?;
                $(
                    mv += self.$item.parse(&buf[mv..])?;
                )*
                Ok(mv)
            }
        }

        impl Serialize for $class {
            fn serialize(&self) -> Vec<u8> {
                vec![
                    self.kind.serialize(),
                    $(
                        self.$item.serialize()
                    ),*
                ].concat()
            }
            fn size(&self) -> usize {
                [
                    self.kind.size(),
                    $(
                        self.$item.size()
                    ),*
                ].iter().sum()
            }
        }

        impl Field for $class {
            fn new() -> Self {
                Self {
                    kind: Uint2::from(Self::KIND),
                    ..Default::default()
                }
            }
        }

        impl ActExec for $class {
            fn apply(&$aself, $actx: &mut dyn Context) -> Rerr $apply
            fn revert(&$aself, $actx: &mut dyn Context) -> Rerr $revert
        }

        impl Action for $class {
            fn kind(&self) -> u16 { *self.kind }
            fn burn_90(&$aself) -> bool { $burn90 }
            fn req_sign(&$aself) -> Vec<Address> { $reqsign.to_vec() }
            fn as_any(&self) -> &dyn Any { self }
        }

        impl $class {
            pub const KIND: u16 = $kid;
        }

    };
}


#[macro_export]
macro_rules! action_register {
    ( $( $kty:ident )+ ) => {

        pub fn try_create(kind: u16, buf: &[u8]) -> $crate::setup::ActCreateRes {
            match kind {
                $(<$kty>::KIND => {
                    let (act, sk) = <$kty>::create(buf)?;
                    Ok(Some((Box::new(act), sk)))
                },)+
                _ => Ok(None)
            }
        }

    };
}
