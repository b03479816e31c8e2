
#[macro_export]
macro_rules! impl_field_only_new {
    ($class:ident) => {
        impl Field for $class {
            fn new() -> Self {
                Self::default()
            }
        }
    };
}


impl Parse for Vec<u8> {
    fn parse(&mut self, s: &[u8]) -> Ret<usize> {
        let sl = self.len();
        if sl > s.len() {
            return errf!("buffer too short")
        }
        self.copy_from_slice(&s[..sl]);
        Ok(sl)
    }
}

impl Serialize for Vec<u8> {
    fn serialize(&self) -> Vec<u8> {
        self.clone()
    }
    fn size(&self) -> usize {
        self.len()
    }
}

impl Field for Vec<u8> {
    fn new() -> Self {
        Vec::new()
    }
}


/*
* zero width placeholder for state status keys
*/
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Empty {}

impl Serialize for Empty {
    fn serialize(&self) -> Vec<u8> {
        Vec::new()
    }
    fn size(&self) -> usize {
        0
    }
}

impl Parse for Empty {
    fn parse(&mut self, _: &[u8]) -> Ret<usize> {
        Ok(0)
    }
}

impl Field for Empty {
    fn new() -> Self {
        Self{}
    }
}
