use std::sync::Arc;

use hacash_core::*;

use field::*;
use protocol::interface::*;
use protocol::state::CoreStateRead;
use protocol::transaction::TransactionType2;
use mint::action::DiamondMint;
use chain::{ChainEngine, EngineConf};

use testkit::*;


const T0: u64 = 1_700_000_000;

fn mint_tx(acc: &sys::Account, miner: Address, name: &str, number: u32,
    prev_hash: Hash, nonce: [u8; 8], ts: u64) -> TransactionType2 {
    let mut act = DiamondMint::with(
        DiamondName::from(name.as_bytes().try_into().unwrap()),
        DiamondNumber::from(number));
    act.prev_hash = prev_hash;
    act.nonce = HashNonce::from(nonce);
    act.address = miner;
    let mut tx = TransactionType2::new_by(miner, Amount::coin(1, 244), ts);
    tx.push_action(Box::new(act)).unwrap();
    tx.fill_sign(acc).unwrap();
    tx
}

fn grow_empty_chain(eng: &mut ChainEngine, miner: Address, upto: u64) -> Hash {
    let mut prev = *eng.latest_hash();
    for h in (eng.latest_height() + 1)..=upto {
        let pkg = build_block(h, prev, T0 + h, miner, vec![]);
        prev = pkg.hash;
        eng.insert_block(pkg).unwrap();
    }
    prev
}


#[test]
fn mint_first_diamond_at_height_five() {
    let oracle = Arc::new(TestOracle::new());
    oracle.plan([1u8; 8], "WTYUIA");
    let mut eng = ChainEngine::open(EngineConf::devnet(), oracle.clone(), Arc::new(MemDisk::new()));
    let (acc, miner) = account("miner-one");

    let prev = grow_empty_chain(&mut eng, miner, 4);
    let mut dia_rx = eng.subscribe_diamond_on_create();
    let mut blk_rx = eng.subscribe_validated_block_on_insert();

    let tx = mint_tx(&acc, miner, "WTYUIA", 1, Hash::default(), [1u8; 8], T0 + 5);
    let pkg = build_block(5, prev, T0 + 5, miner, vec![Box::new(tx)]);
    let blk5_hash = pkg.hash;
    eng.insert_block(pkg).unwrap();

    assert_eq!(eng.latest_height(), 5);
    let state = CoreStateRead::wrap(eng.state());
    let dia = DiamondName::from(*b"WTYUIA");
    let item = state.diamond(&dia).unwrap();
    assert_eq!(item.address, miner);
    assert_eq!(item.status, DIAMOND_STATUS_NORMAL);
    let latest = state.get_latest_diamond();
    assert_eq!(*latest.number, 1);
    assert_eq!(latest.born_hash, blk5_hash);
    assert_eq!(latest.miner_address, miner);
    // smelt and number index are committed with the block
    let smelt = state.diamond_smelt(&dia).unwrap();
    assert_eq!(smelt.born_hash, blk5_hash);
    assert_eq!(state.diamond_name(&DiamondNumber::from(1)).unwrap(), dia);
    // miner diamond balance credited
    assert_eq!(state.balance(&miner).unwrap().diamond, DiamondNumber::from(1));
    // supply counter
    assert_eq!(state.get_total_supply().minted_diamond, DiamondNumber::from(1));

    // events fan out after commit
    let smeltev = dia_rx.try_recv().unwrap();
    assert_eq!(smeltev.diamond, dia);
    assert_eq!(smeltev.born_hash, blk5_hash);
    let blkev = blk_rx.try_recv().unwrap();
    assert_eq!(blkev.hash, blk5_hash);
}


#[test]
fn mint_off_grid_height_goes_back_to_pool() {
    let oracle = Arc::new(TestOracle::new());
    oracle.plan([1u8; 8], "WTYUIA");
    oracle.plan([2u8; 8], "HXVMEK");
    let mut eng = ChainEngine::open(EngineConf::devnet(), oracle.clone(), Arc::new(MemDisk::new()));
    let (acc, miner) = account("miner-two");

    let prev = grow_empty_chain(&mut eng, miner, 5);
    // height 6 is not a multiple of 5
    let tx = mint_tx(&acc, miner, "HXVMEK", 1, Hash::default(), [2u8; 8], T0 + 6);
    let pkg = build_block(6, prev, T0 + 6, miner, vec![Box::new(tx)]);
    let e = eng.insert_block(pkg).unwrap_err();
    assert!(protocol::is_back_to_pool(&e));
    // whole block rejected, nothing committed
    assert_eq!(eng.latest_height(), 5);
    let state = CoreStateRead::wrap(eng.state());
    assert!(state.diamond(&DiamondName::from(*b"HXVMEK")).is_none());
}


#[test]
fn mint_continuity_is_enforced() {
    let oracle = Arc::new(TestOracle::new());
    oracle.plan([1u8; 8], "WTYUIA");
    oracle.plan([2u8; 8], "HXVMEK");
    let mut eng = ChainEngine::open(EngineConf::devnet(), oracle.clone(), Arc::new(MemDisk::new()));
    let (acc, miner) = account("miner-three");

    let prev = grow_empty_chain(&mut eng, miner, 4);
    let tx = mint_tx(&acc, miner, "WTYUIA", 1, Hash::default(), [1u8; 8], T0 + 5);
    let pkg = build_block(5, prev, T0 + 5, miner, vec![Box::new(tx)]);
    eng.insert_block(pkg).unwrap();
    let blk5_hash = *eng.latest_hash();

    let prev = grow_empty_chain(&mut eng, miner, 9);

    // wrong number
    let tx = mint_tx(&acc, miner, "HXVMEK", 1, blk5_hash, [2u8; 8], T0 + 10);
    let pkg = build_block(10, prev, T0 + 10, miner, vec![Box::new(tx)]);
    let e = eng.insert_block(pkg).unwrap_err();
    assert!(e.contains("diamond number need 2"));

    // wrong prev hash
    let tx = mint_tx(&acc, miner, "HXVMEK", 2, Hash::from([8u8; 32]), [2u8; 8], T0 + 10);
    let pkg = build_block(10, prev, T0 + 10, miner, vec![Box::new(tx)]);
    let e = eng.insert_block(pkg).unwrap_err();
    assert!(e.contains("diamond prev hash need"));

    // wrong name against the oracle literal
    let tx = mint_tx(&acc, miner, "BSZNWT", 2, blk5_hash, [2u8; 8], T0 + 10);
    let pkg = build_block(10, prev, T0 + 10, miner, vec![Box::new(tx)]);
    let e = eng.insert_block(pkg).unwrap_err();
    assert!(e.contains("diamond name need"));

    // all preconditions met
    let tx = mint_tx(&acc, miner, "HXVMEK", 2, blk5_hash, [2u8; 8], T0 + 10);
    let pkg = build_block(10, prev, T0 + 10, miner, vec![Box::new(tx)]);
    let blk10_data = pkg.data.clone();
    eng.insert_block(pkg).unwrap();
    let state = CoreStateRead::wrap(eng.state());
    assert_eq!(*state.get_latest_diamond().number, 2);
    assert_eq!(state.balance(&miner).unwrap().diamond, DiamondNumber::from(2));

    // reorganization: unwind the head block, the mint rolls back
    let back = protocol::component::BlockPkg::build(blk10_data).unwrap();
    eng.revert_block(back).unwrap();
    assert_eq!(eng.latest_height(), 9);
    let state = CoreStateRead::wrap(eng.state());
    assert!(state.diamond(&DiamondName::from(*b"HXVMEK")).is_none());
    assert_eq!(*state.get_latest_diamond().number, 1);
    assert_eq!(state.get_latest_diamond().born_hash, blk5_hash);
    assert_eq!(state.balance(&miner).unwrap().diamond, DiamondNumber::from(1));
}


#[test]
fn two_mints_in_one_block_rejected() {
    let oracle = Arc::new(TestOracle::new());
    oracle.plan([1u8; 8], "WTYUIA");
    oracle.plan([2u8; 8], "HXVMEK");
    let mut eng = ChainEngine::open(EngineConf::devnet(), oracle.clone(), Arc::new(MemDisk::new()));
    let (acc, miner) = account("miner-four");

    let prev = grow_empty_chain(&mut eng, miner, 4);
    let tx1 = mint_tx(&acc, miner, "WTYUIA", 1, Hash::default(), [1u8; 8], T0 + 5);
    // the second one claims the next number but lands in the same block
    let tx2 = mint_tx(&acc, miner, "HXVMEK", 2, Hash::default(), [2u8; 8], T0 + 5);
    let pkg = build_block(5, prev, T0 + 5, miner, vec![Box::new(tx1), Box::new(tx2)]);
    let e = eng.insert_block(pkg).unwrap_err();
    assert!(e.contains("diamond"));
    assert_eq!(eng.latest_height(), 4);
}
