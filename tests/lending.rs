use hacash_core::*;

use field::*;
use field::interface::*;
use protocol::interface::*;
use protocol::context::ContextInst;
use protocol::state::CoreStateRead;
use mint::action::{DiamondLendingCreate, DiamondLendingRansom};

use testkit::*;


const LEND_ID: [u8; 14] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14];

fn create_action(loan_mei: u64, period: u8) -> DiamondLendingCreate {
    let mut act = <DiamondLendingCreate as Field>::new();
    act.lending_id = LendingId::from(LEND_ID);
    act.mortgage_diamonds = DiamondNameListMax200::from_readable("WTYUIA,HXVMEK,BSZNWT").unwrap();
    act.loan_total_amount = Amount::mei(loan_mei);
    act.borrow_period = Uint1::from(period);
    act
}

fn ransom_action(amount: Amount) -> DiamondLendingRansom {
    let mut act = <DiamondLendingRansom as Field>::new();
    act.lending_id = LendingId::from(LEND_ID);
    act.ransom_amount = amount;
    act
}

// three diamonds of average bid burn 100 mei each, owner funded
fn lending_fixture(owner: &Address) -> chain::StateInst {
    let mut state = fresh_state();
    seed_diamond(&mut state, "WTYUIA", 1, owner, 100);
    seed_diamond(&mut state, "HXVMEK", 2, owner, 100);
    seed_diamond(&mut state, "BSZNWT", 3, owner, 100);
    seed_balance(&mut state, owner, Amount::mei(10), 6);
    state
}

fn apply_at(state: &mut chain::StateInst, height: u64, main: Address,
    act: &dyn Action) -> sys::Rerr {
    let oracle = TestOracle::new();
    let env = devnet_env(height, main, Amount::zero());
    let mut ctx = ContextInst::new(env, state, &oracle);
    act.apply(&mut ctx)
}

fn revert_at(state: &mut chain::StateInst, height: u64, main: Address,
    act: &dyn Action) -> sys::Rerr {
    let oracle = TestOracle::new();
    let env = devnet_env(height, main, Amount::zero());
    let mut ctx = ContextInst::new(env, state, &oracle);
    act.revert(&mut ctx)
}


#[test]
fn lending_cycle_private_redeem() {
    let (_, alice) = account("alice");
    let mut state = lending_fixture(&alice);

    // mortgage at height 100, period 1 (50 blocks on devnet)
    apply_at(&mut state, 100, alice, &create_action(300, 1)).unwrap();
    {
        let core = CoreStateRead::wrap(&state);
        let bls = core.balance(&alice).unwrap();
        assert!(bls.hacash.equal(&Amount::mei(310)));
        assert_eq!(bls.diamond, DiamondNumber::from(3));
        for name in [b"WTYUIA", b"HXVMEK", b"BSZNWT"] {
            let item = core.diamond(&DiamondName::from(*name)).unwrap();
            assert_eq!(item.status, DIAMOND_STATUS_LENDING_TO_SYSTEM);
            assert_eq!(item.address, alice);
        }
        let contract = core.diamond_lending(&LendingId::from(LEND_ID)).unwrap();
        assert!(!contract.is_ransomed.check());
        assert_eq!(*contract.create_height, 100);
        assert_eq!(*contract.loan_total_mei, 300);
        let supply = core.get_total_supply();
        assert_eq!(*supply.lending_mortgage_count, 3);
        assert_eq!(*supply.lending_loan_mei, 300);
    }

    // redeem at the private boundary: principal 300 plus 0.5% = 301.5 HAC
    apply_at(&mut state, 150, alice, &ransom_action(Amount::from("301.5").unwrap())).unwrap();
    {
        let core = CoreStateRead::wrap(&state);
        let bls = core.balance(&alice).unwrap();
        assert!(bls.hacash.equal(&Amount::from("611.5").unwrap()));
        assert_eq!(bls.diamond, DiamondNumber::from(0));
        for name in [b"WTYUIA", b"HXVMEK", b"BSZNWT"] {
            let item = core.diamond(&DiamondName::from(*name)).unwrap();
            assert_eq!(item.status, DIAMOND_STATUS_NORMAL);
            assert_eq!(item.address, alice);
        }
        let contract = core.diamond_lending(&LendingId::from(LEND_ID)).unwrap();
        assert!(contract.is_ransomed.check());
        let supply = core.get_total_supply();
        assert_eq!(*supply.lending_mortgage_count, 0);
        assert_eq!(*supply.lending_ransom_zhu, 301_5000_0000);
    }

    // terminal: a second redeem fails
    let e = apply_at(&mut state, 151, alice, &ransom_action(Amount::mei(400))).unwrap_err();
    assert!(e.contains("has been redeemed"));
}


#[test]
fn lending_dutch_auction_public_redeem() {
    let (_, alice) = account("alice");
    let (_, bob) = account("bob");
    let mut state = lending_fixture(&alice);
    apply_at(&mut state, 100, alice, &create_action(300, 1)).unwrap();

    // bob needs his own funds to survive the redeem bookkeeping
    seed_balance(&mut state, &bob, Amount::mei(500), 3);

    // private 150, public 200; at 250 one discount step applies:
    // 301500 - 5*1*300 = 300000 thousandths, exactly 300 HAC
    let e = apply_at(&mut state, 250, bob, &ransom_action(Amount::mei(299))).unwrap_err();
    assert!(e.contains("must not less than"));
    apply_at(&mut state, 250, bob, &ransom_action(Amount::mei(300))).unwrap();

    let core = CoreStateRead::wrap(&state);
    for name in [b"WTYUIA", b"HXVMEK", b"BSZNWT"] {
        let item = core.diamond(&DiamondName::from(*name)).unwrap();
        assert_eq!(item.status, DIAMOND_STATUS_NORMAL);
        assert_eq!(item.address, bob);
    }
    let bls = core.balance(&bob).unwrap();
    assert!(bls.hacash.equal(&Amount::mei(800)));
    assert_eq!(bls.diamond, DiamondNumber::from(0));
    assert!(core.diamond_lending(&LendingId::from(LEND_ID)).unwrap().is_ransomed.check());
}


#[test]
fn lending_third_party_rejected_before_private_height() {
    let (_, alice) = account("alice");
    let (_, bob) = account("bob");
    let mut state = lending_fixture(&alice);
    apply_at(&mut state, 100, alice, &create_action(300, 1)).unwrap();

    seed_balance(&mut state, &bob, Amount::mei(500), 3);
    let e = apply_at(&mut state, 120, bob, &ransom_action(Amount::mei(400))).unwrap_err();
    assert!(e.contains("redeemed privately by the mortgagor"));
}


#[test]
fn lending_redeem_needs_sufficient_balances() {
    let (_, alice) = account("alice");
    let (_, bob) = account("bob");
    let mut state = lending_fixture(&alice);
    apply_at(&mut state, 100, alice, &create_action(300, 1)).unwrap();

    // no balance row at all: the redeem bookkeeping must reject, never go negative
    let e = apply_at(&mut state, 250, bob, &ransom_action(Amount::mei(300))).unwrap_err();
    assert!(e.contains("insufficient"));
}


#[test]
fn lending_loan_amount_must_match_bids() {
    let (_, alice) = account("alice");
    let mut state = lending_fixture(&alice);
    // sum of bids is 300, not 299
    let e = apply_at(&mut state, 100, alice, &create_action(299, 1)).unwrap_err();
    assert!(e.contains("loan total amount need"));
}


#[test]
fn lending_gated_off_mainnet() {
    let (_, alice) = account("alice");
    let mut state = lending_fixture(&alice);
    let oracle = TestOracle::new();
    let mut env = devnet_env(100, alice, Amount::zero());
    env.chain.dev_mark = false;
    let mut ctx = ContextInst::new(env, &mut state, &oracle);
    let e = create_action(300, 1).apply(&mut ctx).unwrap_err();
    assert_eq!(e, "mainnet not yet");
}


#[test]
fn lending_apply_revert_is_exact_inverse() {
    let (_, alice) = account("alice");
    let mut state = lending_fixture(&alice);
    let before = state_snapshot(&state);

    let create = create_action(300, 1);
    let ransom = ransom_action(Amount::from("301.5").unwrap());
    apply_at(&mut state, 100, alice, &create).unwrap();
    apply_at(&mut state, 150, alice, &ransom).unwrap();

    // unwind in reverse order
    revert_at(&mut state, 150, alice, &ransom).unwrap();
    revert_at(&mut state, 100, alice, &create).unwrap();
    assert_state_rolled_back(&state, &before);
}
