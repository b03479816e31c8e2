
pub const DIAMOND_HASH_LITERAL_SIZE: usize = 16;


/*
* x16rs mining oracle, the hash machinery itself lives outside the core
*/
pub trait DiamondOracle : Send + Sync {

    // return: (difficulty digest, 16 char literal)
    fn diamond(&self, _number: u32, _prev_hash: &Hash, _nonce: &HashNonce, _address: &Address)
        -> (Hash, [u8; DIAMOND_HASH_LITERAL_SIZE]) { never!() }

    fn check_difficulty(&self, _number: u32, _digest: &Hash) -> bool { never!() }

}


/*
* literal format: 10 leading '0' then 6 name chars
*/
pub fn check_diamond_literal(stuff: &[u8; DIAMOND_HASH_LITERAL_SIZE]) -> Option<DiamondName> {
    const ZERO_LEAD: usize = DIAMOND_HASH_LITERAL_SIZE - DiamondName::SIZE;
    for i in 0..ZERO_LEAD {
        if stuff[i] != b'0' {
            return None
        }
    }
    let tail: [u8; DiamondName::SIZE] = stuff[ZERO_LEAD..].try_into().unwrap();
    if ! DiamondName::is_valid(&tail) {
        return None
    }
    Some(DiamondName::from(tail))
}
