
macro_rules! diamond_operate_define {
    ($func_name: ident, $addr:ident, $hacd:ident, $oldhacd:ident, $newhacdblock:block) => (

        pub fn $func_name(state: &mut CoreState, $addr: &Address, $hacd: &DiamondNumber) -> Ret<DiamondNumber> {
            $addr.check_version()?;
            let mut userbls = state.balance( $addr ).unwrap_or_default();
            let $oldhacd = userbls.diamond;
            let newhacd = $newhacdblock;
            userbls.diamond = newhacd;
            state.balance_set($addr, &userbls);
            Ok(newhacd)
        }

    )
}


diamond_operate_define!(hacd_add, addr, hacd, oldhacd, {
    oldhacd + *hacd
});

diamond_operate_define!(hacd_sub, addr, hacd, oldhacd, {
    if oldhacd < *hacd {
        return errf!("address {} diamond {} is insufficient, at least {}",
            addr.readable(), oldhacd, hacd)
    }
    oldhacd - *hacd
});


/*
* move ownership of one diamond, status must be normal
*/
pub fn hacd_move_one_diamond(state: &mut CoreState, addr_from: &Address, addr_to: &Address, hacd_name: &DiamondName) -> Rerr {
    addr_to.check_version()?;
    if addr_from == addr_to {
        return errf!("cannot transfer to self")
    }
    let mut diaitem = check_diamond_status(state, addr_from, hacd_name)?;
    diaitem.address = addr_to.clone();
    state.diamond_set(hacd_name, &diaitem);
    Ok(())
}


pub fn check_diamond_status(state: &mut CoreState, addr_from: &Address, hacd_name: &DiamondName) -> Ret<DiamondSto> {
    addr_from.check_version()?;
    let diaitem = must_have!(
        format!("diamond {}", hacd_name.to_readable()),
        state.diamond(hacd_name));
    if diaitem.status != DIAMOND_STATUS_NORMAL {
        return errf!("diamond {} has been mortgaged and cannot be transferred", hacd_name.to_readable())
    }
    if *addr_from != diaitem.address {
        return errf!("diamond {} not belong to address {}", hacd_name.to_readable(), addr_from.readable())
    }
    Ok(diaitem)
}
