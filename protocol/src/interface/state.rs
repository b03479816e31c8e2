
pub trait State : Send + Sync {

    fn get(&self, _: Vec<u8>) -> Option<Vec<u8>> { never!() }
    fn set(&mut self, _: Vec<u8>, _: Vec<u8>) { never!() }
    fn del(&mut self, _: Vec<u8>) { never!() }

    fn as_mem(&self) -> &MemMap { never!() }
    fn write_to_disk(&self) { never!() }

}
