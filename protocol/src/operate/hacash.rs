
macro_rules! check_amount_is_positive {
    ($amt:expr) => {
        if ! $amt.is_positive() {
            return errf!("amount {} value is not positive", $amt)
        }
    };
}


macro_rules! amount_op_func_define {
    ($fn:ident, $hac:ident, $addr:ident, $amt:ident, $exec:block) => (

        fn $fn(state: &mut CoreState, $addr: &Address, $amt: &Amount) -> Ret<Amount> {
            $addr.check_version()?;
            let mut bls = state.balance( $addr ).unwrap_or_default();
            let $hac = bls.hacash;
            let newhac = $exec; // do add or sub
            if newhac.size() > 12 {
                return errf!("address {} amount {} size {} over 12 can not to store",
                    $addr.readable(), newhac, newhac.size())
            }
            bls.hacash = newhac.clone();
            state.balance_set($addr, &bls);
            Ok(newhac)
        }

    )
}

amount_op_func_define!{do_hac_sub, hac, addr, amt, {
    if hac < *amt {
        return errf!("address {} balance {} is insufficient, at least {}",
            addr.readable(), hac, amt)
    }
    hac.sub_mode_u128(amt)?
}}

amount_op_func_define!{do_hac_add, hac, addr, amt, {
    hac.add_mode_u128(amt)?
}}


pub fn hac_check(state: &CoreState, addr: &Address, amt: &Amount) -> Ret<Amount> {
    check_amount_is_positive!(amt);
    addr.check_version()?;
    if let Some(bls) = state.balance(addr) {
        if bls.hacash >= *amt {
            return Ok(bls.hacash)
        }
    }
    errf!("address {} balance is insufficient, at least {}", addr.readable(), amt)
}


pub fn hac_add(state: &mut CoreState, addr: &Address, amt: &Amount) -> Rerr {
    check_amount_is_positive!(amt);
    do_hac_add(state, addr, amt)?;
    Ok(())
}


pub fn hac_sub(state: &mut CoreState, addr: &Address, amt: &Amount) -> Rerr {
    check_amount_is_positive!(amt);
    do_hac_sub(state, addr, amt)?;
    Ok(())
}
