
fn do_insert(eng: &mut ChainEngine, mut blk: BlockPkg) -> Rerr {
    let blk_hash = blk.hash;
    let blk_hein = blk.hein;
    let blk_time = blk.objc.timestamp().uint();
    // static verify
    block_verify(&eng.cnf, blk.objc.as_read(), blk.data.len(),
        eng.cur_height, &eng.cur_hash, eng.cur_time)?;
    // walk the body on a scratch fork
    let mut fork = StateFork::wrap(&eng.state);
    let pending;
    {
        let env = create_block_env(&eng.cnf, blk_hein, blk_hash);
        let mut ctx = ContextInst::new(env, &mut fork, eng.oracle.as_ref());
        blk.objc.apply(&mut ctx)?;
        // the block hash is known now, finalize the mint of this block
        pending = ctx.pending_diamond_take();
        if let Some(mut smelt) = pending.clone() {
            smelt.born_hash = blk_hash;
            let mut state = CoreState::wrap(ctx.state());
            state.set_latest_diamond(&smelt);
            state.diamond_smelt_set(&smelt.diamond, &smelt);
            state.diamond_name_set(&smelt.number, &smelt.diamond);
        }
    }
    // commit
    eng.state.merge(fork.into_mem());
    eng.state.write_to_disk();
    eng.cur_height = blk_hein;
    eng.cur_hash = blk_hash;
    eng.cur_time = blk_time;
    // fan out committed events, at most once
    let _ = eng.blk_feed.try_broadcast(Arc::new(blk));
    if let Some(mut smelt) = pending {
        smelt.born_hash = blk_hash;
        let _ = eng.dia_feed.try_broadcast(smelt);
    }
    Ok(())
}


fn do_revert(eng: &mut ChainEngine, mut blk: BlockPkg) -> Rerr {
    if blk.hash != eng.cur_hash {
        return errf!("can only revert the chain head block {}", eng.cur_hash)
    }
    let mut fork = StateFork::wrap(&eng.state);
    {
        let env = create_block_env(&eng.cnf, blk.hein, blk.hash);
        let mut ctx = ContextInst::new(env, &mut fork, eng.oracle.as_ref());
        blk.objc.revert(&mut ctx)?;
    }
    eng.state.merge(fork.into_mem());
    eng.state.write_to_disk();
    eng.cur_height = blk.hein - 1;
    eng.cur_hash = *blk.objc.prevhash();
    eng.cur_time = 0; // prev block time is unknown here
    Ok(())
}


fn create_block_env(cnf: &EngineConf, height: u64, hash: Hash) -> Env {
    Env {
        chain: cnf.chain_info(),
        block: BlkInfo {
            height,
            hash,
            coinbase: Address::default(),
        },
        tx: TxInfo::default(),
    }
}
