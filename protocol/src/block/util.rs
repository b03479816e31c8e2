
// the one chain history anomaly: block 63448 contains one tx twice
pub const TX_REPEAT_PERMIT_HEIGHT: u64 = 63448;


pub fn calculate_mrklroot(hashs: &Vec<Hash>) -> Hash {
    if hashs.is_empty() {
        return Hash::default()
    }
    let mut layer = hashs.clone();
    while layer.len() > 1 {
        if layer.len() % 2 == 1 {
            let tail = layer[layer.len()-1].clone();
            layer.push(tail); // duplicate odd tail
        }
        let mut next = Vec::with_capacity(layer.len() / 2);
        for i in (0..layer.len()).step_by(2) {
            let stuff = vec![layer[i].to_vec(), layer[i+1].to_vec()].concat();
            next.push(Hash::from(sys::calculate_hash(stuff)));
        }
        layer = next;
    }
    layer[0]
}
