
combi_struct!{ BlockHead,
    version           : Uint1
    height            : BlockHeight
    timestamp         : Timestamp
    prevhash          : Hash
    mrklroot          : Hash
    transaction_count : Uint4
}

combi_struct!{ BlockMeta,
    nonce         : Uint4 // mining answer
    difficulty    : Uint4
    witness_stage : Uint2 // reserved, no behavior
}


/*
* head + meta, the block hash preimage
*/
#[derive(Debug, Default)]
pub struct BlockIntro {
    pub head: BlockHead,
    pub meta: BlockMeta,

    // cache
    hash: RwLock<Option<Hash>>,
}

impl Clone for BlockIntro {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            meta: self.meta.clone(),
            hash: RwLock::new(self.hash.read().unwrap().clone()),
        }
    }
}

impl PartialEq for BlockIntro {
    fn eq(&self, other: &Self) -> bool {
        self.head == other.head && self.meta == other.meta
    }
}

impl Eq for BlockIntro {}


impl Parse for BlockIntro {
    fn parse(&mut self, buf: &[u8]) -> Ret<usize> {
        let mut seek = self.head.parse(buf)?;
        seek += self.meta.parse(&buf[seek..])?;
        self.fresh();
        Ok(seek)
    }
}

impl Serialize for BlockIntro {
    fn serialize(&self) -> Vec<u8> {
        vec![
            self.head.serialize(),
            self.meta.serialize(),
        ].concat()
    }
    fn size(&self) -> usize {
        self.head.size() + self.meta.size()
    }
}

impl_field_only_new!{BlockIntro}


impl BlockIntro {

    pub const SIZE: usize = 89;

    // first reader computes, then cached until fresh()
    pub fn hash(&self) -> Hash {
        if let Some(hx) = *self.hash.read().unwrap() {
            return hx
        }
        let mut cache = self.hash.write().unwrap();
        if let Some(hx) = *cache {
            return hx
        }
        let hx = self.hash_fresh_unsafe();
        *cache = Some(hx);
        hx
    }

    pub fn hash_fresh(&self) -> Hash {
        let mut cache = self.hash.write().unwrap();
        let hx = self.hash_fresh_unsafe();
        *cache = Some(hx);
        hx
    }

    fn hash_fresh_unsafe(&self) -> Hash {
        let stuff = self.serialize();
        Hash::from(sys::calculate_double_hash(stuff))
    }

    // drop the cache after any mutation
    pub fn fresh(&self) {
        *self.hash.write().unwrap() = None;
    }

}
