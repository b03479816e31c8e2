
#[macro_export]
macro_rules! inst_state_get_key {
    ($idx:expr, $key:expr) => {{
        std::iter::once($idx as u8).chain($key.serialize()).collect()
    }}
}

#[macro_export]
macro_rules! inst_state_get_or_none {
    ($self:ident, $key:ident, $idx:expr, $vty:ty) => {{
        let k: Vec<u8> = $crate::inst_state_get_key!($idx, $key);
        $self.sta.get(k).map(|v|<$vty>::must(&v))
    }}
}

#[macro_export]
macro_rules! inst_state_get_or_default {
    ($self:ident, $idx:expr, $vty:ty) => {{
        let mut v = <$vty>::default();
        if let Some(bts) = $self.sta.get(vec![$idx]) {
            v.parse(&bts).unwrap(); // must
        }
        v
    }}
}


#[macro_export]
macro_rules! inst_state_define {
    ($class:ident, $( $idx:expr, $kn:ident, $kty:ty : $vty:ty )+ ) => {

        concat_idents::concat_idents!{ classread = $class, Read {

            pub struct classread<'a> {
                sta: &'a dyn State,
            }

            impl<'a> classread<'a> {

                pub fn wrap(s: &'a dyn State) -> Self {
                    Self { sta: s }
                }

                $(
                    pub fn $kn(&self, key: &$kty) -> Option<$vty> {
                        let k: Vec<u8> = std::iter::once($idx as u8).chain(key.serialize()).collect();
                        self.sta.get(k).map(|v|<$vty>::must(&v))
                    }

                    concat_idents::concat_idents!{ get_stat = get_, $kn {
                    pub fn get_stat(&self) -> $vty {
                        let mut v = <$vty>::default();
                        if let Some(bts) = self.sta.get(vec![$idx]) {
                            v.parse(&bts).unwrap(); // must
                        }
                        v
                    }
                    }}
                )+

            }

        }}

        /********/

        pub struct $class<'a> {
            sta: &'a mut dyn State,
        }

        impl<'a> $class<'a> {

            pub fn wrap(s: &'a mut dyn State) -> Self {
                Self { sta: s }
            }

            $(

                pub fn $kn(&self, key: &$kty) -> Option<$vty> {
                    let k: Vec<u8> = std::iter::once($idx as u8).chain(key.serialize()).collect();
                    self.sta.get(k).map(|v|<$vty>::must(&v))
                }

                concat_idents::concat_idents!{ fn_exist = $kn, _exist {
                pub fn fn_exist(&self, key: &$kty) -> bool {
                    let k: Vec<u8> = std::iter::once($idx as u8).chain(key.serialize()).collect();
                    self.sta.get(k).is_some()
                }
                }}

                concat_idents::concat_idents!{ fn_set = $kn, _set {
                pub fn fn_set(&mut self, key: &$kty, v: &$vty) {
                    let k: Vec<u8> = std::iter::once($idx as u8).chain(key.serialize()).collect();
                    self.sta.set(k, v.serialize())
                }
                }}

                concat_idents::concat_idents!{ fn_del = $kn, _del {
                pub fn fn_del(&mut self, key: &$kty) {
                    let k: Vec<u8> = std::iter::once($idx as u8).chain(key.serialize()).collect();
                    self.sta.del(k)
                }
                }}

                concat_idents::concat_idents!{ get_stat = get_, $kn {
                pub fn get_stat(&self) -> $vty {
                    let mut v = <$vty>::default();
                    if let Some(bts) = self.sta.get(vec![$idx]) {
                        v.parse(&bts).unwrap(); // must
                    }
                    v
                }
                }}

                concat_idents::concat_idents!{ set_stat = set_, $kn {
                pub fn set_stat(&mut self, v: &$vty) {
                    self.sta.set(vec![$idx], v.serialize())
                }
                }}

                concat_idents::concat_idents!{ del_stat = del_, $kn {
                pub fn del_stat(&mut self) {
                    self.sta.del(vec![$idx])
                }
                }}

            )+

        }

    };
}
