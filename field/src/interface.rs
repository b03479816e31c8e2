use sys::*;

pub trait Serialize {
    fn serialize(&self) -> Vec<u8> { unimplemented!() }
    fn size(&self) -> usize { unimplemented!() }
}

pub trait Parse {
    // return: eaten length
    fn parse(&mut self, _: &[u8]) -> Ret<usize> { unimplemented!() }
}


pub trait Field : Serialize + Parse {

    fn new() -> Self where Self: Sized { unimplemented!() }

    fn must(buf: &[u8]) -> Self where Self: Sized {
        let mut v = Self::new();
        match v.parse(buf) {
            Ok(_) => v,
            Err(e) => panic!("{}", e),
        }
    }

    fn build(buf: &[u8]) -> Ret<Self> where Self: Sized {
        let mut v = Self::new();
        v.parse(buf).map(|_|v)
    }

    fn create(buf: &[u8]) -> Ret<(Self, usize)> where Self: Sized {
        let mut v = Self::new();
        let res = v.parse(buf);
        res.map(|s|(v,s))
    }

}


pub trait Hex : Field {
    fn to_hex(&self) -> String { unimplemented!() }
    fn from_hex(_: &[u8]) -> Ret<Self> where Self: Sized { unimplemented!() }
}

pub trait Base64 : Field {
    fn to_base64(&self) -> String { unimplemented!() }
}

pub trait Readable : Field {
    fn to_readable(&self) -> String { unimplemented!() }
    fn from_readable(_: &[u8]) -> Ret<Self> where Self: Sized { unimplemented!() }
}
