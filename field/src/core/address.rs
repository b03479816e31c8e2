use base58check::*;


#[repr(transparent)]
#[derive(Debug, Hash, Copy, Clone, PartialEq, Eq)]
pub struct Address(Fixed21);


impl Address {

    pub const SIZE: usize = 21;

    // version: https://en.bitcoin.it/wiki/List_of_address_prefixes
    pub const PRIVAKEY: u8 = 0; // leading symbol: 1
    pub const SCRIPTMH: u8 = 5; // leading symbol: 3

    pub const UNKNOWN: Self = Address(Fixed21::DEFAULT);

    pub const fn zero() -> Self {
        Self::UNKNOWN
    }

}

impl Default for Address {
    fn default() -> Self {
        Address(Fixed21::default())
    }
}

impl Deref for Address {
    type Target = Fixed21;
    fn deref(&self) -> &Fixed21 {
        &self.0
    }
}

impl DerefMut for Address {
    fn deref_mut(&mut self) -> &mut Fixed21 {
        &mut self.0
    }
}

impl From<[u8; 21]> for Address {
    fn from(v: [u8; 21]) -> Self {
        Address(Fixed21::from(v))
    }
}

impl Index<usize> for Address {
    type Output = u8;
    fn index(&self, idx: usize) -> &u8 {
        &self.0[idx]
    }
}

impl IndexMut<usize> for Address {
    fn index_mut(&mut self, idx: usize) -> &mut u8 {
        &mut self.0[idx]
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", self.to_readable())
    }
}

impl Parse for Address {
    fn parse(&mut self, buf: &[u8]) -> Ret<usize> {
        self.0.parse(buf)
    }
}

impl Serialize for Address {
    fn serialize(&self) -> Vec<u8> {
        self.0.serialize()
    }
    fn size(&self) -> usize {
        self.0.size()
    }
}

impl_field_only_new!{Address}


impl Address {

    pub fn version(&self) -> u8 {
        self[0]
    }

    pub fn check_version(&self) -> Rerr {
        let v = self.version();
        match v {
            Self::PRIVAKEY | Self::SCRIPTMH => Ok(()),
            _ => errf!("address version {} not support", v)
        }
    }

    pub fn is_privakey(&self) -> bool {
        self.version() == Self::PRIVAKEY
    }

    pub fn must_privakey(&self) -> Rerr {
        maybe!(self.is_privakey(),
            Ok(()),
            errf!("address {} is not privakey type", self.readable())
        )
    }

    pub fn from_bytes(stuff: &[u8]) -> Ret<Self> {
        if stuff.len() != Self::SIZE {
            return errf!("address size not match")
        }
        let addr = Self::from(<[u8; 21]>::try_from(stuff).unwrap());
        addr.check_version()?;
        Ok(addr)
    }

    pub fn to_readable(&self) -> String {
        Account::to_readable(self.0.as_array())
    }

    pub fn readable(&self) -> String {
        self.to_readable()
    }

    pub fn from_readable(addr: &str) -> Ret<Self> {
        let Ok((version, body)) = addr.from_base58check() else {
            return errf!("base58check error")
        };
        if body.len() != Self::SIZE - 1 {
            return err!("address length error")
        }
        let mut address = Self::default();
        address[0] = version;
        for i in 1..Self::SIZE {
            address[i] = body[i-1];
        }
        address.check_version()?;
        Ok(address)
    }

}
