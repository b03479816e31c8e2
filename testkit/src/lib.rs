use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use sys::*;
use field::*;
use field::interface::*;

use protocol::*;
use protocol::interface::*;
use protocol::component::*;
use protocol::state::CoreState;
use protocol::transaction::TransactionCoinbase;
use protocol::block::BlockV1;

use chain::{StateInst, EngineConf};


/*
* in-memory stand-in for the external kv store engine
*/
#[derive(Default)]
pub struct MemDisk {
    data: Mutex<HashMap<Vec<u8>, Vec<u8>>>,
}

impl MemDisk {
    pub fn new() -> MemDisk {
        Self::default()
    }
}

impl DiskDB for MemDisk {

    fn read(&self, k: &[u8]) -> Option<Vec<u8>> {
        self.data.lock().unwrap().get(k).cloned()
    }

    fn write(&self, batch: &MemKV) {
        let mut data = self.data.lock().unwrap();
        batch.for_each(&mut |k, v| {
            match v {
                Some(v) => { data.insert(k.clone(), v.clone()); },
                None => { data.remove(k); },
            }
        });
    }

}


/*
* scripted x16rs stand-in: nonce picks the planned literal,
* difficulty always passes
*/
#[derive(Default)]
pub struct TestOracle {
    plans: Mutex<HashMap<[u8; 8], [u8; 16]>>,
}

impl TestOracle {

    pub fn new() -> TestOracle {
        Self::default()
    }

    // plan: mining with this nonce yields this 6 char diamond name
    pub fn plan(&self, nonce: [u8; 8], name: &str) {
        assert_eq!(name.len(), 6);
        let mut literal = *b"0000000000??????";
        literal[10..].copy_from_slice(name.as_bytes());
        self.plans.lock().unwrap().insert(nonce, literal);
    }

}

impl DiamondOracle for TestOracle {

    fn diamond(&self, _number: u32, _prev_hash: &Hash, nonce: &HashNonce, _address: &Address)
        -> (Hash, [u8; 16]) {
        let literal = self.plans.lock().unwrap()
            .get(nonce.as_array()).cloned()
            .unwrap_or(*b"0000000000000000"); // unplanned nonce never mints
        let digest = Hash::from(sys::calculate_hash(literal));
        (digest, literal)
    }

    fn check_difficulty(&self, _number: u32, _digest: &Hash) -> bool {
        true
    }

}


/*
* state and context fixtures
*/
pub fn fresh_state() -> StateInst {
    mint::setup();
    let mut state = StateInst::build(Arc::new(MemDisk::new()));
    // genesis-like status slots so snapshots compare cleanly
    CoreState::wrap(&mut state).set_total_supply(&TotalSupply::default());
    state
}

pub fn devnet_env(height: u64, main: Address, fee: Amount) -> Env {
    let cnf = EngineConf::devnet();
    Env {
        chain: cnf.chain_info(),
        block: BlkInfo {
            height,
            hash: Hash::default(),
            coinbase: Address::default(),
        },
        tx: TxInfo {
            ty: 2,
            fee,
            main,
            addrs: vec![main],
        },
    }
}


pub fn account(pass: &str) -> (Account, Address) {
    let acc = Account::create_by(pass).unwrap();
    let addr = Address::from(*acc.address());
    (acc, addr)
}


// seed one diamond with its smelt record, owner balance not touched
pub fn seed_diamond(state: &mut dyn State, name: &str, number: u32, owner: &Address, bid_burn_mei: u16) {
    let dia = DiamondName::from(name.as_bytes().try_into().unwrap());
    let mut core = CoreState::wrap(state);
    core.diamond_set(&dia, &DiamondSto {
        status: DIAMOND_STATUS_NORMAL,
        address: *owner,
    });
    let smelt = DiamondSmelt {
        diamond: dia,
        number: DiamondNumber::from(number),
        born_height: BlockHeight::from(number as u64 * 5),
        born_hash: Hash::default(),
        prev_hash: Hash::default(),
        miner_address: *owner,
        nonce: HashNonce::default(),
        average_bid_burn: Uint2::from(bid_burn_mei),
    };
    core.diamond_smelt_set(&dia, &smelt);
    core.diamond_name_set(&smelt.number, &dia);
    core.set_latest_diamond(&smelt);
}


pub fn seed_balance(state: &mut dyn State, addr: &Address, hac: Amount, diamonds: u32) {
    let mut core = CoreState::wrap(state);
    core.balance_set(addr, &Balance {
        hacash: hac,
        diamond: DiamondNumber::from(diamonds),
    });
}


// full visible snapshot of every key the overlay has touched
pub fn state_snapshot(state: &dyn State) -> HashMap<Vec<u8>, Option<Vec<u8>>> {
    let mut shot = HashMap::new();
    for k in state.as_mem().keys() {
        shot.insert(k.clone(), state.get(k.clone()));
    }
    shot
}

pub fn assert_state_rolled_back(state: &dyn State, before: &HashMap<Vec<u8>, Option<Vec<u8>>>) {
    for k in state.as_mem().keys() {
        let now = state.get(k.clone());
        let was = before.get(k).cloned().unwrap_or(None);
        assert_eq!(now, was, "state key {} diverged after revert", hex::encode(k));
    }
}


/*
* block building
*/
pub fn build_block(height: u64, prev_hash: Hash, timestamp: u64, reward_to: Address,
    txs: Vec<Box<dyn Transaction>>) -> BlockPkg {
    let mut blk = BlockV1::new();
    blk.intro.head.height = BlockHeight::from(height);
    blk.intro.head.timestamp = Timestamp::from(timestamp);
    blk.intro.head.prevhash = prev_hash;
    let coinbase = TransactionCoinbase::new_by(reward_to, Amount::mei(1), "testing");
    blk.push_transaction(Box::new(coinbase)).unwrap();
    for tx in txs {
        blk.push_transaction(tx).unwrap();
    }
    blk.update_mrklroot();
    BlockPkg::create(Box::new(blk))
}
