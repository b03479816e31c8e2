
pub fn create_tx_info(tx: &dyn TransactionRead) -> TxInfo {
    TxInfo {
        ty: tx.ty(),
        fee: tx.fee_pay(),
        main: tx.main(),
        addrs: tx.addrs(),
    }
}


/*
* verify tx all needs signature
*/
pub fn verify_tx_signature(tx: &dyn TransactionRead) -> Rerr {
    let hx = tx.hash();
    let addrs = tx.req_sign()?;
    let signs = tx.signs();
    for adr in addrs {
        verify_one_sign(&hx, &adr, signs)?;
    }
    Ok(())
}


pub fn verify_target_signature(adr: &Address, tx: &dyn TransactionRead) -> Ret<bool> {
    let hx = tx.hash();
    verify_one_sign(&hx, adr, tx.signs())
}


pub fn verify_one_sign(hash: &Hash, addr: &Address, signs: &Vec<Sign>) -> Ret<bool> {
    for sig in signs {
        let sigaddr = Address::from(Account::get_address_by_public_key(*sig.publickey));
        if sigaddr == *addr {
            return match Account::verify_signature(hash.as_array(), sig.publickey.as_array(), sig.signature.as_array()) {
                true => Ok(true),
                false => errf!("address {} verify signature failed", addr.readable()),
            }
        }
    }
    errf!("address {} signature not find", addr.readable())
}
