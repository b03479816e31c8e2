
// Sign Item
combi_struct!{ Sign,
    publickey: Fixed33
    signature: Fixed64
}

impl Sign {
    pub fn create_by(acc: &Account, stuff: &Hash) -> Self {
        Self{
            publickey: Fixed33::from(acc.public_key().serialize_compressed()),
            signature: Fixed64::from(acc.do_sign(stuff.as_array())),
        }
    }
}


// SignList MaxLen 4294967295
combi_list!(SignW4, Uint4, Sign);
