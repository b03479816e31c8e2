
/*
* static checks before any state mutation
*/
pub fn block_verify(cnf: &EngineConf, isrt_blk: &dyn BlockRead, blk_data_len: usize,
    prev_height: u64, prev_hash: &Hash, prev_time: u64) -> Rerr {

    // check height and prev hash continuity
    let blk_hei = isrt_blk.height().uint();
    if blk_hei != prev_height + 1 {
        return errf!("need block height {} but got {}", prev_height + 1, blk_hei)
    }
    let prev_hx = isrt_blk.prevhash();
    if *prev_hx != *prev_hash {
        return errf!("need prev hash {} but got {}", prev_hash, prev_hx)
    }
    // check time
    let blk_time = isrt_blk.timestamp().uint();
    let cur_time = curtimes();
    if blk_time > cur_time {
        return errf!("block timestamp {} cannot more than system timestamp {}", blk_time, cur_time)
    }
    if blk_time < prev_time {
        return errf!("block timestamp {} cannot less than prev block timestamp {}", blk_time, prev_time)
    }
    // check size
    if blk_data_len > cnf.max_block_size + block::BlockIntro::SIZE {
        return errf!("block size cannot over {} bytes", cnf.max_block_size)
    }
    // check tx count
    let txhxs = isrt_blk.transaction_hash_list();
    let txcount = isrt_blk.transaction_count().uint() as usize;
    if txcount < 1 {
        return err!("block txs cannot empty, need coinbase tx")
    }
    if txcount > cnf.max_block_txs {
        return errf!("block txs cannot more than {}", cnf.max_block_txs)
    }
    if txcount != txhxs.len() {
        return errf!("block tx count need {} but got {}", txhxs.len(), txcount)
    }
    // check each tx
    let alltxs = isrt_blk.transactions();
    let mut txttnum = 0usize;
    const CBTY: u8 = TransactionCoinbase::TYPE;
    for tx in alltxs {
        let txty = tx.ty();
        // only one coinbase, at the first slot
        if txttnum == 0 && txty != CBTY {
            return errf!("tx({}) type must be coinbase", txttnum)
        }
        if txttnum >= 1 && txty == CBTY {
            return errf!("tx({}) type cannot be coinbase", txttnum)
        }
        let txsz = tx.size();
        if txsz > cnf.max_tx_size {
            return errf!("tx size cannot more than {} bytes", cnf.max_tx_size)
        }
        txttnum += 1;
        if txty == CBTY {
            continue // ignore coinbase other check
        }
        let an = tx.action_count();
        if an != tx.actions().len() {
            return errf!("tx action count not match")
        }
        if an > cnf.max_tx_actions {
            return errf!("tx action count cannot more than {}", cnf.max_tx_actions)
        }
        if tx.timestamp().uint() > cur_time {
            return errf!("tx timestamp {} cannot more than now {}", tx.timestamp(), cur_time)
        }
        // verify all needs signature
        tx.as_ref().as_read().verify_signature()?;
    }
    if txttnum != txcount {
        return errf!("block tx count need {} but got {}", txcount, txttnum)
    }
    // check mrkl root
    let mkroot = block::calculate_mrklroot(&txhxs);
    let mrklrt = isrt_blk.mrklroot();
    if *mrklrt != mkroot {
        return errf!("block mrkl root need {} but got {}", mkroot, mrklrt)
    }
    Ok(())
}
