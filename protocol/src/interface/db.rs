
/*
* read side of the external kv store engine
*/
pub trait DiskDB : Send + Sync {
    fn read(&self, _: &[u8]) -> Option<Vec<u8>> { never!() }
    fn write(&self, _: &MemKV) { never!() }
}
