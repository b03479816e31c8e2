
// Balance
combi_struct!{ Balance,
    hacash:  Amount
    diamond: DiamondNumber
}

impl Balance {

    pub fn hac(amt: Amount) -> Self {
        Self {
            hacash: amt,
            ..Default::default()
        }
    }

}
