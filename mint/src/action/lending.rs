
/*
* mortgage diamonds to the system and loan HAC
*/
action_define!{ DiamondLendingCreate, 15, false, [],
    {
        lending_id        : LendingId
        mortgage_diamonds : DiamondNameListMax200
        loan_total_amount : Amount
        borrow_period     : Uint1 // 1 ~ 20, one period is 0.5% interest
    },
    (self, ctx),
    {
        lending_create_apply(self, ctx)
    },
    {
        lending_create_revert(self, ctx)
    }
}


fn lending_create_apply(this: &DiamondLendingCreate, ctx: &mut dyn Context) -> Rerr {
    let env = ctx.env().clone();
    if ! env.chain.dev_mark {
        return errf!("mainnet not yet")
    }
    let fee_addr = env.tx.main;
    let pending_height = env.block.height;
    this.lending_id.check_format()?;
    let period = *this.borrow_period;
    if period < 1 || period > 20 {
        return errf!("borrow period must between 1 ~ 20")
    }
    let dianum = this.mortgage_diamonds.check()?;
    let mut state = CoreState::wrap(ctx.state());
    if state.diamond_lending(&this.lending_id).is_some() {
        return errf!("diamond lending {} already exist", this.lending_id.to_hex())
    }
    // mortgage each diamond and count the loanable HAC
    let mut total_loan_mei = 0u64;
    for dia in this.mortgage_diamonds.list() {
        let mut item = must_have!(
            format!("diamond {}", dia.to_readable()),
            state.diamond(dia));
        if item.status != DIAMOND_STATUS_NORMAL {
            return errf!("diamond {} has been mortgaged and cannot be transferred", dia.to_readable())
        }
        if item.address != fee_addr {
            return errf!("diamond {} not belong to address {}", dia.to_readable(), fee_addr.readable())
        }
        item.status = DIAMOND_STATUS_LENDING_TO_SYSTEM;
        state.diamond_set(dia, &item);
        let smelt = must_have!(
            format!("diamond smelt {}", dia.to_readable()),
            state.diamond_smelt(dia));
        total_loan_mei += *smelt.average_bid_burn as u64;
    }
    // the loan must match the sum of average bid burns exactly
    let total_amt = Amount::mei(total_loan_mei);
    if ! total_amt.equal(&this.loan_total_amount) {
        return errf!("loan total amount need {} but got {}",
            total_amt.to_fin_string(), this.loan_total_amount.to_fin_string())
    }
    hacd_sub(&mut state, &fee_addr, &DiamondNumber::from(dianum as u32))?;
    hac_add(&mut state, &fee_addr, &this.loan_total_amount)?;
    // save the contract
    let contract = DiamondLendingSto {
        is_ransomed: Bool::new(false),
        create_height: BlockHeight::from(pending_height),
        main_address: fee_addr,
        mortgage_diamonds: this.mortgage_diamonds.clone(),
        loan_total_mei: Uint4::from(total_loan_mei as u32),
        borrow_period: this.borrow_period,
    };
    state.diamond_lending_set(&this.lending_id, &contract);
    // supply counters
    let mut supply = state.get_total_supply();
    supply.lending_mortgage_count += dianum as u32;
    supply.lending_loan_mei += total_loan_mei;
    state.set_total_supply(&supply);
    Ok(())
}


fn lending_create_revert(this: &DiamondLendingCreate, ctx: &mut dyn Context) -> Rerr {
    let env = ctx.env().clone();
    if ! env.chain.dev_mark {
        return errf!("mainnet not yet")
    }
    let fee_addr = env.tx.main;
    let dianum = this.mortgage_diamonds.length();
    let mut state = CoreState::wrap(ctx.state());
    let mut total_loan_mei = 0u64;
    for dia in this.mortgage_diamonds.list() {
        let mut item = must_have!(
            format!("diamond {}", dia.to_readable()),
            state.diamond(dia));
        item.status = DIAMOND_STATUS_NORMAL;
        state.diamond_set(dia, &item);
        let smelt = must_have!(
            format!("diamond smelt {}", dia.to_readable()),
            state.diamond_smelt(dia));
        total_loan_mei += *smelt.average_bid_burn as u64;
    }
    hacd_add(&mut state, &fee_addr, &DiamondNumber::from(dianum as u32))?;
    hac_sub(&mut state, &fee_addr, &this.loan_total_amount)?;
    state.diamond_lending_del(&this.lending_id);
    let mut supply = state.get_total_supply();
    supply.lending_mortgage_count -= dianum as u32;
    supply.lending_loan_mei -= total_loan_mei;
    state.set_total_supply(&supply);
    Ok(())
}


/*
* redeem mortgaged diamonds, dutch auction interest discount past
* the public redeem height
*/
action_define!{ DiamondLendingRansom, 16, false, [],
    {
        lending_id    : LendingId
        ransom_amount : Amount
    },
    (self, ctx),
    {
        lending_ransom_apply(self, ctx)
    },
    {
        lending_ransom_revert(self, ctx)
    }
}


fn lending_ransom_apply(this: &DiamondLendingRansom, ctx: &mut dyn Context) -> Rerr {
    let env = ctx.env().clone();
    if ! env.chain.dev_mark {
        return errf!("mainnet not yet")
    }
    let period_blocks = env.chain.borrow_period_blocks;
    let fee_addr = env.tx.main;
    let pending_height = env.block.height;
    this.lending_id.check_format()?;
    if this.ransom_amount.is_negative() {
        return errf!("ransom amount cannot be negative")
    }
    let mut state = CoreState::wrap(ctx.state());
    let mut contract = must_have!(
        format!("diamond lending {}", this.lending_id.to_hex()),
        state.diamond_lending(&this.lending_id));
    if contract.is_ransomed.check() {
        return errf!("diamond lending {} has been redeemed", this.lending_id.to_hex())
    }
    let period = *contract.borrow_period as u64;
    let loan_mei = *contract.loan_total_mei as u64;
    // before the private height only the mortgagor may redeem
    let private_height = *contract.create_height + period * period_blocks;
    if pending_height <= private_height && fee_addr != contract.main_address {
        return errf!("it can only be redeemed privately by the mortgagor {} before the block height {}",
            contract.main_address.readable(), private_height)
    }
    let valid_ransom = calculate_lending_ransom_amount(
        period, loan_mei, period_blocks, private_height, pending_height);
    if this.ransom_amount < valid_ransom {
        return errf!("valid ransom amount must not less than {} but got {}",
            valid_ransom.to_fin_string(), this.ransom_amount.to_fin_string())
    }
    hac_add(&mut state, &fee_addr, &this.ransom_amount)?;
    // release every mortgaged diamond to the redeemer
    let dianum = contract.mortgage_diamonds.length();
    for dia in contract.mortgage_diamonds.list() {
        let mut item = must_have!(
            format!("diamond {}", dia.to_readable()),
            state.diamond(dia));
        if item.status != DIAMOND_STATUS_LENDING_TO_SYSTEM {
            return errf!("diamond {} status is not lending to system", dia.to_readable())
        }
        item.status = DIAMOND_STATUS_NORMAL;
        item.address = fee_addr;
        state.diamond_set(dia, &item);
    }
    hacd_sub(&mut state, &fee_addr, &DiamondNumber::from(dianum as u32))?;
    // terminal state, a contract never leaves it forward
    contract.is_ransomed = Bool::new(true);
    state.diamond_lending_set(&this.lending_id, &contract);
    let mut supply = state.get_total_supply();
    supply.lending_mortgage_count -= dianum as u32;
    supply.lending_ransom_zhu += this.ransom_amount.to_zhu_u64().unwrap_or(0);
    state.set_total_supply(&supply);
    Ok(())
}


fn lending_ransom_revert(this: &DiamondLendingRansom, ctx: &mut dyn Context) -> Rerr {
    let env = ctx.env().clone();
    if ! env.chain.dev_mark {
        return errf!("mainnet not yet")
    }
    let fee_addr = env.tx.main;
    let mut state = CoreState::wrap(ctx.state());
    let mut contract = must_have!(
        format!("diamond lending {}", this.lending_id.to_hex()),
        state.diamond_lending(&this.lending_id));
    // back to mortgaged, owned by the mortgagor
    let dianum = contract.mortgage_diamonds.length();
    for dia in contract.mortgage_diamonds.list() {
        let mut item = must_have!(
            format!("diamond {}", dia.to_readable()),
            state.diamond(dia));
        item.status = DIAMOND_STATUS_LENDING_TO_SYSTEM;
        item.address = contract.main_address;
        state.diamond_set(dia, &item);
    }
    hacd_add(&mut state, &fee_addr, &DiamondNumber::from(dianum as u32))?;
    hac_sub(&mut state, &fee_addr, &this.ransom_amount)?;
    contract.is_ransomed = Bool::new(false);
    state.diamond_lending_set(&this.lending_id, &contract);
    let mut supply = state.get_total_supply();
    supply.lending_mortgage_count += dianum as u32;
    supply.lending_ransom_zhu -= this.ransom_amount.to_zhu_u64().unwrap_or(0);
    state.set_total_supply(&supply);
    Ok(())
}
