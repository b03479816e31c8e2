
// None marks a deletion
pub type MemMap = HashMap<Vec<u8>, Option<Vec<u8>>>;


#[derive(Default, Clone)]
pub struct MemKV {
    pub memry: MemMap
}

impl MemKV {

    pub fn new() -> MemKV {
        Self {
            memry: HashMap::default()
        }
    }

    pub fn del(&mut self, k: Vec<u8>) {
        self.memry.insert(k, None);
    }

    pub fn put(&mut self, k: Vec<u8>, v: Vec<u8>) {
        self.memry.insert(k, Some(v));
    }

    pub fn get(&self, k: &Vec<u8>) -> Option<Option<Vec<u8>>> {
        self.memry.get(k).map(|item|item.clone())
    }

    pub fn extend(&mut self, other: MemMap) {
        self.memry.extend(other);
    }

    pub fn for_each(&self, each: &mut dyn FnMut(&Vec<u8>, &Option<Vec<u8>>)) {
        for (k, v) in self.memry.iter() {
            each(k, v);
        }
    }

}
