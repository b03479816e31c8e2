
pub type LendingId = Fixed14;

impl LendingId {

    // first and last byte must be non-zero
    pub fn check_format(&self) -> Rerr {
        let bts = self.as_bytes();
        if bts[0] == 0 || bts[Self::SIZE-1] == 0 {
            return errf!("diamond lending id format error")
        }
        Ok(())
    }

}


/*
* DiamondLending contract
*/
combi_struct!{ DiamondLendingSto,
    is_ransomed       : Bool
    create_height     : BlockHeight
    main_address      : Address
    mortgage_diamonds : DiamondNameListMax200
    loan_total_mei    : Uint4
    borrow_period     : Uint1 // 1 ~ 20
}
