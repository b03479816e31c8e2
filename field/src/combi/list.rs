

#[macro_export]
macro_rules! combi_list {
    ($class:ident, $cty:ty, $vty:ty) => (

        #[derive(Default, Clone, PartialEq, Eq)]
        pub struct $class {
            count: $cty,
            lists: Vec<$vty>,
        }

        impl std::fmt::Debug for $class {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "[list {}]", *self.count)
            }
        }

        impl std::ops::Index<usize> for $class {
            type Output = $vty;
            fn index(&self, idx: usize) -> &Self::Output {
                &self.lists[idx]
            }
        }

        impl Parse for $class {
            fn parse(&mut self, buf: &[u8]) -> Ret<usize> {
                let mut seek = self.count.parse(buf)?;
                let count = *self.count as usize;
                self.lists = Vec::new();
                for _ in 0..count {
                    let (obj, mvsk) = <$vty>::create(&buf[seek..])?;
                    seek += mvsk;
                    self.lists.push(obj);
                }
                Ok(seek)
            }
        }

        impl Serialize for $class {
            fn serialize(&self) -> Vec<u8> {
                let mut resdt = self.count.serialize();
                for li in &self.lists {
                    resdt.append(&mut li.serialize());
                }
                resdt
            }
            fn size(&self) -> usize {
                let mut size = self.count.size();
                for li in &self.lists {
                    size += li.size();
                }
                size
            }
        }

        impl Field for $class {
            fn new() -> Self {
                Self::default()
            }
        }

        impl $class {

            pub fn length(&self) -> usize {
                self.count.uint() as usize
            }

            pub fn count(&self) -> &$cty {
                &self.count
            }

            pub fn list(&self) -> &Vec<$vty> {
                &self.lists
            }

            pub fn into_list(self) -> Vec<$vty> {
                self.lists
            }

            pub fn push(&mut self, v: $vty) -> Rerr {
                if *self.count as u128 + 1 > <$cty>::MAX as u128 {
                    return errf!("append size overflow")
                }
                self.count += 1;
                self.lists.push(v);
                Ok(())
            }

            pub fn append(&mut self, mut list: Vec<$vty>) -> Rerr {
                let num = *self.count as usize + list.len();
                if num as u128 > <$cty>::MAX as u128 {
                    return errf!("append size overflow")
                }
                self.count = <$cty>::from_usize(num)?;
                self.lists.append(&mut list);
                Ok(())
            }

            pub fn pop(&mut self) -> Option<$vty> {
                match *self.count {
                    0 => None,
                    _ => {
                        self.count -= 1;
                        self.lists.pop()
                    }
                }
            }

            pub fn from_list(v: Vec<$vty>) -> Ret<Self> {
                let num = v.len();
                if num as u128 > <$cty>::MAX as u128 {
                    return errf!("list data size overflow")
                }
                Ok(Self{
                    count: <$cty>::from_usize(num)?,
                    lists: v,
                })
            }

        }

    )
}
