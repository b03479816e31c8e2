

/*
* polymorphic list, count prefix on wire, items created by the given dispatcher
*/
#[macro_export]
macro_rules! combi_dynlist {
    ($class:ident, $lenty:ty, $dynty:ident, $createfn:path) => (

        #[derive(Default, Clone)]
        pub struct $class {
            count: $lenty,
            vlist: Vec<Box<dyn $dynty>>
        }

        impl std::fmt::Debug for $class {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "[dyn list {}]", *self.count)
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
                let mut seek = self.count.parse(buf)?;
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
                let mut bts = self.count.serialize();
                for li in &self.vlist {
                    bts.append(&mut li.as_ref().serialize());
                }
                bts
            }
            fn size(&self) -> usize {
                let mut sznum = self.count.size();
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

            pub fn length(&self) -> usize {
                *self.count as usize
            }

            pub fn count(&self) -> &$lenty {
                &self.count
            }

            pub fn list(&self) -> &Vec<Box<dyn $dynty>> {
                &self.vlist
            }

            pub fn push(&mut self, v: Box<dyn $dynty>) -> Rerr {
                if *self.count as u128 + 1 > <$lenty>::MAX as u128 {
                    return errf!("list length overflow")
                }
                self.count += 1;
                self.vlist.push(v);
                Ok(())
            }

            pub fn pop(&mut self) -> Option<Box<dyn $dynty>> {
                match *self.count {
                    0 => None,
                    _ => {
                        self.count -= 1;
                        self.vlist.pop()
                    }
                }
            }

        }

    )
}
