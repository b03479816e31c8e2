
/*
* mint one diamond, one per block, block height divisible by 5
*/
action_define!{ DiamondMint, 4,
    *self.number > DIAMOND_ABOVE_NUMBER_OF_BURNING90_PERCENT_TX_FEES, // burn 90 fee
    [], // need sign
    {
        diamond   : DiamondName
        number    : DiamondNumber
        prev_hash : Hash
        nonce     : HashNonce
        address   : Address
    },
    (self, ctx),
    {
        diamond_mint_apply(self, ctx)
    },
    {
        diamond_mint_revert(self, ctx)
    }
}


impl DiamondMint {

    pub fn with(diamond: DiamondName, number: DiamondNumber) -> Self {
        let mut act = <Self as Field>::new();
        act.diamond = diamond;
        act.number = number;
        act
    }

    pub fn downcast(act: &Box<dyn Action>) -> Option<&DiamondMint> {
        act.as_any().downcast_ref::<DiamondMint>()
    }

}


fn diamond_mint_apply(this: &DiamondMint, ctx: &mut dyn Context) -> Rerr {
    let env = ctx.env().clone();
    let pending_height = env.block.height;
    // {BACKTOPOOL} tells the mempool to retry next block
    if pending_height % 5 != 0 {
        return errf!("{}diamond must be contained in block height multiple of 5", BACKTOPOOL)
    }
    let number = this.number;
    let dianum = *number;
    let name = this.diamond;
    let namestr = name.to_readable();
    this.address.must_privakey()?;
    {
        let mut state = CoreState::wrap(ctx.state());
        // continuity against the latest diamond
        let latest = state.get_latest_diamond();
        let latestnum = *latest.number;
        if dianum != latestnum + 1 {
            return errf!("diamond number need {} but got {}", latestnum + 1, dianum)
        }
        if dianum > 1 && latest.born_hash != this.prev_hash {
            return errf!("diamond prev hash need {} but got {}", latest.born_hash, this.prev_hash)
        }
        if state.diamond(&name).is_some() {
            return errf!("diamond {} already exist", namestr)
        }
    }
    // check mine
    let (digest, literal) = ctx.oracle().diamond(dianum, &this.prev_hash, &this.nonce, &this.address);
    let Some(dianame) = check_diamond_literal(&literal) else {
        return errf!("hash result {} is not a valid diamond", bytes_to_readable_string_or_hex(&literal))
    };
    if dianame != name {
        return errf!("diamond name need {} but got {}", dianame.to_readable(), namestr)
    }
    if ! ctx.oracle().check_difficulty(dianum, &digest) {
        return errf!("diamond difficulty not match")
    }
    // one mint per block
    if let Some(hav) = ctx.pending_diamond() {
        return errf!("this block already contain diamond {}", hav.diamond.to_readable())
    }
    // counters
    let tx_bid_fee = env.tx.fee.clone();
    let smelt;
    {
        let mut state = CoreState::wrap(ctx.state());
        let mut supply = state.get_total_supply();
        supply.minted_diamond += 1;
        if dianum > DIAMOND_ABOVE_NUMBER_OF_BURNING90_PERCENT_TX_FEES {
            let burn = calculate_bid_burn_90(&tx_bid_fee)?;
            supply.hacd_bid_burn_zhu += burn.to_zhu_u64().unwrap_or(0);
        }
        let average_bid_burn = calculate_diamond_average_bid_burn(dianum, *supply.hacd_bid_burn_zhu);
        // the containing block hash is not known yet, committed later
        smelt = DiamondSmelt {
            diamond: name,
            number: number,
            born_height: BlockHeight::from(pending_height),
            born_hash: Hash::default(),
            prev_hash: this.prev_hash,
            miner_address: this.address,
            nonce: this.nonce,
            average_bid_burn: average_bid_burn,
        };
        state.set_latest_diamond(&smelt);
        // save diamond
        let diaitem = DiamondSto {
            status: DIAMOND_STATUS_NORMAL,
            address: this.address,
        };
        state.diamond_set(&name, &diaitem);
        hacd_add(&mut state, &this.address, &DiamondNumber::from(1))?;
        state.set_total_supply(&supply);
    }
    ctx.pending_diamond_set(smelt)
}


fn diamond_mint_revert(this: &DiamondMint, ctx: &mut dyn Context) -> Rerr {
    let env = ctx.env().clone();
    let name = this.diamond;
    let dianum = *this.number;
    let mut state = CoreState::wrap(ctx.state());
    // drop the diamond and its mint records
    state.diamond_del(&name);
    state.diamond_smelt_del(&name);
    state.diamond_name_del(&this.number);
    // roll the latest diamond pointer back
    if dianum > 1 {
        let prevnum = DiamondNumber::from(dianum - 1);
        let prevname = must_have!(
            format!("diamond number {}", prevnum),
            state.diamond_name(&prevnum));
        let prevsmelt = must_have!(
            format!("diamond smelt {}", prevname.to_readable()),
            state.diamond_smelt(&prevname));
        state.set_latest_diamond(&prevsmelt);
    } else {
        state.del_latest_diamond();
    }
    // counters
    let mut supply = state.get_total_supply();
    supply.minted_diamond -= 1;
    if dianum > DIAMOND_ABOVE_NUMBER_OF_BURNING90_PERCENT_TX_FEES {
        let burn = calculate_bid_burn_90(&env.tx.fee)?;
        supply.hacd_bid_burn_zhu -= burn.to_zhu_u64().unwrap_or(0);
    }
    state.set_total_supply(&supply);
    hacd_sub(&mut state, &this.address, &DiamondNumber::from(1))?;
    Ok(())
}
