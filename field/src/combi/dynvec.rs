

/*
* polymorphic vector whose count lives outside the wire body,
* set with set_count() before parse
*/
#[macro_export]
macro_rules! combi_dynvec {
    ($class:ident, $lenty:ty, $dynty:ident, $createfn:path) => (

        #[derive(Default, Clone)]
        pub struct $class {
            count: $lenty,
            vlist: Vec<Box<dyn $dynty>>
        }

        impl std::fmt::Debug for $class {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "[dyn vec {}]", *self.count)
            }
        }

        impl PartialEq for $class {
            #[inline]
            fn eq(&self, _: &Self) -> bool {
                false
            }
        }

        impl Eq for $class {}

        impl Parse for $class {
            fn parse(&mut self, buf: &[u8]) -> Ret<usize> {
                let mut seek = 0;
                let count = *self.count as usize;
                self.vlist = Vec::new();
                for _ in 0..count {
                    let (obj, mvsk) = $createfn(&buf[seek..])?;
                    seek += mvsk;
                    self.vlist.push(obj);
                }
                Ok(seek)
            }
        }

        impl Serialize for $class {
            fn serialize(&self) -> Vec<u8> {
                let mut bts = Vec::new();
                for li in &self.vlist {
                    bts.append(&mut li.as_ref().serialize());
                }
                bts
            }
            fn size(&self) -> usize {
                let mut sznum = 0;
                for li in &self.vlist {
                    sznum += li.as_ref().size();
                }
                sznum
            }
        }

        impl Field for $class {
            fn new() -> Self {
                Self::default()
            }
        }

        impl $class {

            pub fn set_count(&mut self, n: $lenty) {
                self.count = n;
            }

            pub fn length(&self) -> usize {
                self.vlist.len()
            }

            pub fn list(&self) -> &Vec<Box<dyn $dynty>> {
                &self.vlist
            }

            pub fn as_mut_list(&mut self) -> &mut Vec<Box<dyn $dynty>> {
                &mut self.vlist
            }

            pub fn push(&mut self, v: Box<dyn $dynty>) -> Rerr {
                if self.vlist.len() as u128 + 1 > <$lenty>::MAX as u128 {
                    return errf!("list length overflow")
                }
                self.count += 1;
                self.vlist.push(v);
                Ok(())
            }

        }

    )
}
