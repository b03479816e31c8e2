
use num_bigint::*;
use num_bigint::Sign::*;
use num_traits::*;

const U128S: usize = u128::BITS as usize / 8;
const U64S:  usize =  u64::BITS as usize / 8;

pub const UNIT_MEI: u8 = 248;
pub const UNIT_ZHU: u8 = 240;

const AMOUNT_MAX_TAIL: usize = 127;

const FROM_CHARS: &[u8; 13] = b"0123456789-.:";


/*
* compact chain amount: sign(dist) * tail bytes * 10^unit
*/
#[derive(Default, Hash, Clone, PartialEq, Eq)]
pub struct Amount {
    unit: u8,
    dist: i8,
    byte: Vec<u8>,
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", self.to_fin_string())
    }
}

impl Debug for Amount {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "[{},{},{:?}]", self.unit, self.dist, self.byte)
    }
}

impl Ord for Amount {
    fn cmp(&self, other: &Self) -> Ordering {
        Amount::cmp(self, other)
    }
}

impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(Amount::cmp(self, other))
    }
}


impl Parse for Amount {
    fn parse(&mut self, buf: &[u8]) -> Ret<usize> {
        self.unit = bufeatone(&buf)?;
        self.dist = bufeatone(&buf[1..])? as i8;
        let btlen = self.dist.unsigned_abs() as usize;
        self.byte = bufeat(&buf[2..], btlen)?;
        Ok(2 + btlen)
    }
}

impl Serialize for Amount {
    fn serialize(&self) -> Vec<u8> {
        vec![
            vec![self.unit, self.dist as u8],
            self.byte.clone()
        ].concat()
    }
    fn size(&self) -> usize {
        1 + 1 + self.dist.unsigned_abs() as usize
    }
}

impl_field_only_new!{Amount}


impl Amount {

    pub fn unit(&self) -> u8 {
        self.unit
    }

    pub fn dist(&self) -> i8 {
        self.dist
    }

    pub fn byte(&self) -> &Vec<u8> {
        &self.byte
    }

    pub fn tail_len(&self) -> usize {
        self.dist.unsigned_abs() as usize
    }

    pub fn tail_u128(&self) -> Ret<u128> {
        if self.byte.len() > U128S {
            return errf!("amount tail bytes length too long over {}", U128S)
        }
        Ok(u128::from_be_bytes(add_left_padding(&self.byte, U128S).try_into().unwrap()))
    }

    pub fn tail_u64(&self) -> Ret<u64> {
        if self.byte.len() > U64S {
            return errf!("amount tail bytes length too long over {}", U64S)
        }
        Ok(u64::from_be_bytes(add_left_padding(&self.byte, U64S).try_into().unwrap()))
    }

    pub fn is_zero(&self) -> bool {
        self.unit == 0 || self.dist == 0 || bytes_is_zero(&self.byte)
    }

    pub fn not_zero(&self) -> bool {
        !self.is_zero()
    }

    // positive and not zero
    pub fn is_positive(&self) -> bool {
        self.unit > 0 && self.dist > 0 && bytes_not_zero(&self.byte)
    }

    // negative and not zero
    pub fn is_negative(&self) -> bool {
        self.unit > 0 && self.dist < 0 && bytes_not_zero(&self.byte)
    }

}


macro_rules! ret_amtfmte {
    ($tip: expr, $v: expr) => {
        return Err(format!("amount {} from '{}' format error or overflow", $tip, $v))
    };
}

macro_rules! coin_with {
    ($fn:ident, $ty:ty) => {
        fn $fn(mut v: $ty, mut u: u8) -> Amount {
            if v == 0 || u == 0 {
                return Self::zero()
            }
            while v % 10 == 0 {
                if u == 255 {
                    break // unit max
                }
                v /= 10;
                u += 1;
            }
            let bts = drop_left_zero(&v.to_be_bytes());
            Self {
                unit: u,
                dist: bts.len() as i8,
                byte: bts
            }
        }
    }
}

// from
impl Amount {

    pub fn zero() -> Amount {
        Self::default()
    }

    pub fn small(v: u8, u: u8) -> Amount {
        Self {
            unit: u,
            dist: 1i8,
            byte: vec![v],
        }
    }

    pub fn mei(v: u64) -> Amount {
        Self::coin(v, UNIT_MEI)
    }

    pub fn zhu(v: u64) -> Amount {
        Self::coin(v, UNIT_ZHU)
    }

    coin_with!{coin_u128, u128}
    coin_with!{coin_u64,  u64}

    pub fn coin(v: u64, u: u8) -> Amount {
        Self::coin_u64(v, u)
    }

    pub fn from(v: &str) -> Ret<Amount> {
        let v = v.replace(",", "").replace(" ", "").replace("\n", "");
        for a in v.chars() {
            if ! FROM_CHARS.contains(&(a as u8)) {
                ret_amtfmte!{"unsupported characters", String::from(a)}
            }
        }
        match v.contains(":") {
            true  => Self::from_fin(v),
            false => Self::from_mei(v),
        }
    }

    fn from_fin(v: String) -> Ret<Amount> {
        let amt: Vec<&str> = v.split(":").collect();
        if amt.len() != 2 {
            ret_amtfmte!{"fin", v}
        }
        let Ok(u) = amt[1].parse::<u8>() else {
            ret_amtfmte!{"unit", amt[1]}
        };
        let Ok(n) = amt[0].parse::<i128>() else {
            // fall to bigint
            let Ok(bign) = BigInt::from_str_radix(&amt[0], 10) else {
                return errf!("amount '{}' overflow", &v)
            };
            let mut amt = Self::from_bigint(&bign)?;
            amt.unit = u;
            return Ok(amt)
        };
        let mut amt = Self::coin_u128(n.unsigned_abs(), u);
        if n < 0 {
            amt.dist *= -1;
        }
        Ok(amt)
    }

    fn from_mei(v: String) -> Ret<Amount> {
        let mut u: u8 = UNIT_MEI;
        let Ok(mut f) = v.parse::<f64>() else {
            ret_amtfmte!{"value", v}
        };
        while f.fract() > 0.0 {
            if u == 0 {
                ret_amtfmte!{"value", v}
            }
            u -= 1;
            f *= 10.0;
        }
        if f.abs() > u128::MAX as f64 {
            ret_amtfmte!{"value", v}
        }
        let mut amt = Self::coin_u128(f.abs() as u128, u);
        if f < 0.0 {
            amt.dist *= -1;
        }
        Ok(amt)
    }

    pub fn from_bigint(bignum: &BigInt) -> Ret<Amount> {
        let numstr = bignum.to_string();
        if numstr == "0" {
            return Ok(Amount::zero())
        }
        let mut numuse = numstr.as_str().trim_end_matches('0').to_owned();
        let mut unit = numstr.len() - numuse.len();
        if unit > 255 { // unit max is 255
            numuse += &"0".repeat(unit - 255);
            unit = 255;
        }
        let Ok(biguse) = BigInt::from_str_radix(&numuse, 10) else {
            return errf!("amount from bigint '{}' error", numstr)
        };
        let (sign, byte) = biguse.to_bytes_be();
        let dist = byte.len();
        if dist > AMOUNT_MAX_TAIL {
            return errf!("amount tail bytes len overflow {}", AMOUNT_MAX_TAIL)
        }
        let mut dist = dist as i8;
        if sign == Minus {
            dist *= -1;
        }
        Ok( Self {
            byte,
            dist,
            unit: unit as u8
        })
    }

    pub fn from_unit_byte(unit: u8, byte: Vec<u8>) -> Ret<Amount> {
        let bl = byte.len();
        if bl > AMOUNT_MAX_TAIL {
            return errf!("amount tail bytes len overflow {}", AMOUNT_MAX_TAIL)
        }
        Ok(Amount{
            unit: unit,
            dist: bl as i8,
            byte: byte,
        })
    }

}


// to string
impl Amount {

    pub fn sign(&self) -> String {
        match self.dist < 0 {
            true => "-",
            false => "",
        }.to_string()
    }

    pub fn to_fin_string(&self) -> String {
        let (a, b, c) = self.to_string_part();
        format!("{}{}:{}", a, b, c)
    }

    pub fn to_string_part(&self) -> (String, String, String) {
        let blen = self.tail_len();
        let s2 = match blen > U128S {
            true => BigInt::from_bytes_be(Plus, &self.byte).to_string(),
            false => u128::from_be_bytes(add_left_padding(&self.byte, U128S).try_into().unwrap()).to_string(),
        };
        (self.sign(), s2, self.unit.to_string())
    }

    pub fn to_bigint(&self) -> BigInt {
        if self.is_zero() {
            return 0u64.into();
        }
        let sig = match self.dist > 0 {
            true => Plus,
            false => Minus,
        };
        let bignum = BigInt::from_bytes_be(sig, &self.byte[..]);
        let base: BigInt = 10u64.into();
        let powv = base.pow(self.unit as u32);
        bignum * powv
    }

    pub fn to_biguint(&self) -> BigUint {
        assert!(!self.is_negative());
        if self.is_zero() {
            return 0u64.into();
        }
        let numv = BigUint::from_bytes_be(&self.byte[..]);
        let powv = BigUint::from(10u64).pow(self.unit as u32);
        numv * powv
    }

}


macro_rules! to_unit_define {
    ($fu64:ident, $fu128:ident, $unit:expr) => {

        pub fn $fu128(&self) -> Option<u128> {
            self.to_unit_biguint($unit).to_u128()
        }

        pub fn $fu64(&self) -> Option<u64> {
            let Some(u) = self.$fu128() else {
                return None
            };
            if u > u64::MAX as u128 {
                return None
            }
            Some(u as u64)
        }

    };
}

impl Amount {

    to_unit_define!{ to_mei_u64, to_mei_u128, UNIT_MEI }
    to_unit_define!{ to_zhu_u64, to_zhu_u128, UNIT_ZHU }

    // "unit-248" style integer view
    pub fn to_unit_biguint(&self, base_unit: u8) -> BigUint {
        assert!(!self.is_negative());
        if self.is_zero() {
            return 0u64.into()
        }
        let bigu = self.to_biguint();
        let powv: BigUint = BigUint::from(10u64).pow(base_unit as u32);
        bigu / powv
    }

}


// compare
impl Amount {

    pub fn equal(&self, src: &Amount) -> bool {
        self.unit == src.unit &&
        self.dist == src.dist &&
        self.byte == src.byte
        ||
        self.is_zero() && src.is_zero()
    }

    fn cmp_mode_u128(&self, src: &Amount) -> Ret<Ordering> {
        let mut du = self.tail_u128()?;
        let mut su =  src.tail_u128()?;
        let utsk = (self.unit as i32 - src.unit as i32).unsigned_abs();
        let Some(powv) = 10u128.checked_pow(utsk) else {
            return errf!("amount compare unit overflow")
        };
        if self.unit > src.unit {
            let Some(ndu) = du.checked_mul(powv) else {
                return errf!("amount compare overflow")
            };
            du = ndu;
        } else if self.unit < src.unit {
            let Some(nsu) = su.checked_mul(powv) else {
                return errf!("amount compare overflow")
            };
            su = nsu;
        }
        Ok(du.cmp(&su))
    }

    fn cmp_mode_bigint(&self, src: &Amount) -> Ordering {
        let db = self.to_bigint();
        let sb =  src.to_bigint();
        db.cmp(&sb)
    }

    pub fn cmp(&self, src: &Amount) -> Ordering {
        use Ordering::*;
        if self.dist < 0 || src.dist < 0 {
            panic!("cannot compare between with negative")
        }
        if self.equal(src) {
            return Equal
        }
        let dzro = self.is_zero();
        let szro =  src.is_zero();
        if dzro && szro {
            return Equal
        } else if dzro {
            return Less // left(0) < right(+)
        } else if szro {
            return Greater // left(+) > right(0)
        }
        if self.tail_len() <= U128S && src.tail_len() <= U128S {
            if let Ok(ord) = self.cmp_mode_u128(src) {
                return ord
            }
        }
        self.cmp_mode_bigint(src)
    }

}


/************* compute *************/


macro_rules! rte_ovfl {
    () => {
        return Err("amount computing size overflow".to_string());
    };
}
macro_rules! rte_cneg {
    ($tip: expr) => {
        return Err(format!("amount {} cannot between negative", $tip));
    };
}

fn bytes_not_zero(v: &[u8]) -> bool {
    v.iter().any(|a|*a>0)
}

fn bytes_is_zero(v: &[u8]) -> bool {
    !bytes_not_zero(v)
}

fn add_left_padding(v: &Vec<u8>, n: usize) -> Vec<u8> {
    vec![
        vec![0u8; n-v.len()],
        v.clone(),
    ].concat()
}

fn drop_left_zero(v: &[u8]) -> Vec<u8> {
    let mut res = &v[..];
    while res.len() > 0 && res[0] == 0 {
        res = &res[1..];
    }
    res.to_vec()
}


macro_rules! compute_mode_define {
    ($fun:ident, $op:ident, $ty:ty, $ts:expr, $coinfn:ident, $add_or_sub:expr) => {

        pub fn $fun(&self, src: &Amount) -> Ret<Amount> {
            let dst: &Amount = self;
            if dst.dist < 0 || src.dist < 0 {
                rte_cneg!{stringify!($op)}
            }
            let dzro = dst.is_zero();
            let szro = src.is_zero();
            if dzro && szro {
                return Ok(Self::zero())
            }
            if $add_or_sub {
                // add
                if dzro {
                    return Ok(src.clone())
                } else if szro {
                    return Ok(dst.clone())
                }
            } else {
                // sub
                if dzro {
                    rte_ovfl!{}
                } else if szro {
                    return Ok(dst.clone())
                }
            }
            // both not zero
            let dtl = dst.tail_len();
            let stl = src.tail_len();
            if dtl > $ts || stl > $ts {
                rte_ovfl!{}
            }
            let mut du = <$ty>::from_be_bytes(add_left_padding(&dst.byte, $ts).try_into().unwrap());
            let mut su = <$ty>::from_be_bytes(add_left_padding(&src.byte, $ts).try_into().unwrap());
            let utsk = (dst.unit as i32 - src.unit as i32).unsigned_abs();
            let baseut;
            if dst.unit > src.unit {
                let Some(powv) = (10 as $ty).checked_pow(utsk) else {
                    rte_ovfl!{}
                };
                let Some(ndu) = du.checked_mul(powv) else {
                    rte_ovfl!{}
                };
                du = ndu;
                baseut = src.unit;
            } else if dst.unit < src.unit {
                let Some(powv) = (10 as $ty).checked_pow(utsk) else {
                    rte_ovfl!{}
                };
                let Some(nsu) = su.checked_mul(powv) else {
                    rte_ovfl!{}
                };
                su = nsu;
                baseut = dst.unit;
            } else {
                baseut = dst.unit;
                if !$add_or_sub && du == su {
                    return Ok(Self::zero())
                }
            }
            let Some(resv) = du.$op(su) else {
                rte_ovfl!{}
            };
            Ok(Self::$coinfn(resv, baseut))
        }

    }
}

impl Amount {

    compute_mode_define!{add_mode_u64,  checked_add, u64,   U64S, coin_u64,  true}
    compute_mode_define!{add_mode_u128, checked_add, u128, U128S, coin_u128, true}
    compute_mode_define!{sub_mode_u64,  checked_sub, u64,   U64S, coin_u64,  false}
    compute_mode_define!{sub_mode_u128, checked_sub, u128, U128S, coin_u128, false}

    pub fn add_mode_bigint(&self, src: &Amount) -> Ret<Amount> {
        let db = self.to_bigint() + src.to_bigint();
        Self::from_bigint(&db)
    }

    pub fn sub_mode_bigint(&self, src: &Amount) -> Ret<Amount> {
        let db = self.to_bigint() - src.to_bigint();
        Self::from_bigint(&db)
    }

    // drop one unit: keep 1/10, for the 90% fee burn
    pub fn unit_sub(&self, sub: u8) -> Ret<Amount> {
        if sub >= self.unit {
            return errf!("unit_sub error: unit must big than {}", sub)
        }
        let mut res = self.clone();
        res.unit -= sub;
        Ok(res)
    }

}
