use hacash_core::*;

use field::*;
use field::interface::*;
use protocol::interface::*;
use protocol::context::ContextInst;
use protocol::state::CoreStateRead;
use protocol::transaction::TransactionType2;
use protocol::block::TX_REPEAT_PERMIT_HEIGHT;
use protocol::action::{DiamondTransfer, DiamondQuantityTransfer};
use chain::EngineConf;

use testkit::*;


const T0: u64 = 1_700_000_000;

fn transfer_tx(acc: &sys::Account, from: Address, to: Address, name: &str, ts: u64) -> TransactionType2 {
    let mut act = <DiamondTransfer as Field>::new();
    act.diamond = DiamondName::from(name.as_bytes().try_into().unwrap());
    act.to = to;
    let mut tx = TransactionType2::new_by(from, Amount::coin(1, 244), ts);
    tx.push_action(Box::new(act)).unwrap();
    tx.fill_sign(acc).unwrap();
    tx
}

fn block_env(height: u64, hash: Hash) -> protocol::Env {
    let cnf = EngineConf::devnet();
    protocol::Env {
        chain: cnf.chain_info(),
        block: protocol::BlkInfo { height, hash, coinbase: Address::default() },
        tx: protocol::TxInfo::default(),
    }
}


#[test]
fn duplicate_tx_in_block_rejected() {
    let (acc, alice) = account("alice");
    let (_, bob) = account("bob");
    let (_, miner) = account("miner");
    let mut state = fresh_state();
    seed_diamond(&mut state, "WTYUIA", 1, &alice, 10);
    seed_balance(&mut state, &alice, Amount::mei(10), 1);

    let tx = transfer_tx(&acc, alice, bob, "WTYUIA", T0);
    let pkg = build_block(700, Hash::default(), T0, miner,
        vec![Box::new(tx.clone()), Box::new(tx)]);
    let mut blk = pkg.into_block();

    let oracle = TestOracle::new();
    let mut ctx = ContextInst::new(block_env(700, Hash::default()), &mut state, &oracle);
    let e = blk.apply(&mut ctx).unwrap_err();
    assert!(e.contains("already exist"));
}


#[test]
fn duplicate_tx_grandfathered_at_the_permit_height() {
    let (acc, alice) = account("alice");
    let (_, bob) = account("bob");
    let (_, miner) = account("miner");
    let mut state = fresh_state();
    seed_diamond(&mut state, "WTYUIA", 1, &alice, 10);
    seed_balance(&mut state, &alice, Amount::mei(10), 1);

    let tx = transfer_tx(&acc, alice, bob, "WTYUIA", T0);
    let pkg = build_block(TX_REPEAT_PERMIT_HEIGHT, Hash::default(), T0, miner,
        vec![Box::new(tx.clone()), Box::new(tx)]);
    let mut blk = pkg.into_block();

    let oracle = TestOracle::new();
    let mut ctx = ContextInst::new(
        block_env(TX_REPEAT_PERMIT_HEIGHT, Hash::default()), &mut state, &oracle);
    // the duplicate-hash gate is waived here; the block still fails,
    // but only because the transfer itself cannot run twice
    let e = blk.apply(&mut ctx).unwrap_err();
    assert!(!e.contains("already exist"));
    assert!(e.contains("not belong to address"));
}


#[test]
fn block_apply_credits_coinbase_and_fees() {
    let (acc, alice) = account("alice");
    let (_, bob) = account("bob");
    let (_, miner) = account("miner");
    let mut state = fresh_state();
    seed_diamond(&mut state, "WTYUIA", 1, &alice, 10);
    seed_balance(&mut state, &alice, Amount::mei(10), 1);
    seed_balance(&mut state, &bob, Amount::zero(), 0);
    seed_balance(&mut state, &miner, Amount::mei(5), 0);

    let tx = transfer_tx(&acc, alice, bob, "WTYUIA", T0);
    let pkg = build_block(700, Hash::default(), T0, miner, vec![Box::new(tx)]);
    let blk_hash = pkg.hash;
    let mut blk = pkg.into_block();

    let oracle = TestOracle::new();
    {
        let mut ctx = ContextInst::new(block_env(700, blk_hash), &mut state, &oracle);
        blk.apply(&mut ctx).unwrap();
    }

    let core = CoreStateRead::wrap(&state);
    // diamond moved with its balance counters
    let item = core.diamond(&DiamondName::from(*b"WTYUIA")).unwrap();
    assert_eq!(item.address, bob);
    assert_eq!(core.balance(&alice).unwrap().diamond, DiamondNumber::from(0));
    assert_eq!(core.balance(&bob).unwrap().diamond, DiamondNumber::from(1));
    // miner got reward plus the fee
    let reward_plus_fee = Amount::mei(1).add_mode_u128(&Amount::coin(1, 244)).unwrap();
    let expect = Amount::mei(5).add_mode_u128(&reward_plus_fee).unwrap();
    assert!(core.balance(&miner).unwrap().hacash.equal(&expect));
    // tx recorded at this height
    let tx0 = &blk.transactions()[1];
    assert_eq!(core.tx_exist(&tx0.hash()).map(|h|*h), Some(700));
}


#[test]
fn block_apply_then_revert_restores_the_state() {
    let (acc, alice) = account("alice");
    let (_, bob) = account("bob");
    let (_, miner) = account("miner");
    let mut state = fresh_state();
    seed_diamond(&mut state, "WTYUIA", 1, &alice, 10);
    seed_balance(&mut state, &alice, Amount::mei(10), 1);
    seed_balance(&mut state, &bob, Amount::zero(), 0);
    seed_balance(&mut state, &miner, Amount::mei(5), 0);
    let before = state_snapshot(&state);

    let tx = transfer_tx(&acc, alice, bob, "WTYUIA", T0);
    let pkg = build_block(700, Hash::default(), T0, miner, vec![Box::new(tx)]);
    let blk_hash = pkg.hash;
    let mut blk = pkg.into_block();

    let oracle = TestOracle::new();
    {
        let mut ctx = ContextInst::new(block_env(700, blk_hash), &mut state, &oracle);
        blk.apply(&mut ctx).unwrap();
    }
    {
        let mut ctx = ContextInst::new(block_env(700, blk_hash), &mut state, &oracle);
        blk.revert(&mut ctx).unwrap();
    }
    assert_state_rolled_back(&state, &before);
}


#[test]
fn batch_transfer_two_hundred_roundtrip() {
    let (_, alice) = account("alice");
    let (_, bob) = account("bob");
    let mut state = fresh_state();

    const CHARS: &[u8; 16] = b"WTYUIAHXVMEKBSZN";
    let mut names = Vec::with_capacity(200);
    for i in 0..200usize {
        let name = [
            CHARS[i % 16], CHARS[(i / 16) % 16],
            b'W', b'T', b'Y', b'U',
        ];
        let name = String::from_utf8(name.to_vec()).unwrap();
        seed_diamond(&mut state, &name, (i + 1) as u32, &alice, 10);
        names.push(DiamondName::from(name.as_bytes().try_into().unwrap()));
    }
    seed_balance(&mut state, &alice, Amount::mei(10), 200);
    seed_balance(&mut state, &bob, Amount::zero(), 0);
    let before = state_snapshot(&state);

    let mut act = <DiamondQuantityTransfer as Field>::new();
    act.from = alice;
    act.to = bob;
    act.diamonds = DiamondNameListMax255::from_list(names.clone()).unwrap();
    assert_eq!(act.diamonds.check().unwrap(), 200);

    let oracle = TestOracle::new();
    let env = devnet_env(900, alice, Amount::zero());
    {
        let mut ctx = ContextInst::new(env.clone(), &mut state, &oracle);
        act.apply(&mut ctx).unwrap();
    }
    {
        let core = CoreStateRead::wrap(&state);
        assert_eq!(core.balance(&bob).unwrap().diamond, DiamondNumber::from(200));
        assert_eq!(core.balance(&alice).unwrap().diamond, DiamondNumber::from(0));
        for name in &names {
            assert_eq!(core.diamond(name).unwrap().address, bob);
        }
    }
    // revert restores every owner
    {
        let mut ctx = ContextInst::new(env, &mut state, &oracle);
        act.revert(&mut ctx).unwrap();
    }
    assert_state_rolled_back(&state, &before);
    let core = CoreStateRead::wrap(&state);
    for name in &names {
        assert_eq!(core.diamond(name).unwrap().address, alice);
    }
}
