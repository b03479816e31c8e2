
// BlockPkg
#[derive(Clone)]
pub struct BlockPkg {
    pub hein: u64,
    pub hash: Hash,
    pub data: Vec<u8>,
    pub objc: Box<dyn Block>,
}

impl BlockPkg {

    pub fn create(objc: Box<dyn Block>) -> Self {
        let data = objc.serialize();
        Self {
            hein: objc.height().uint(),
            hash: objc.hash(),
            data,
            objc,
        }
    }

    pub fn build(data: Vec<u8>) -> Ret<Self> {
        let (objc, _) = block::create(&data)?;
        Ok(Self {
            hein: objc.height().uint(),
            hash: objc.hash(),
            data,
            objc,
        })
    }

    pub fn into_block(self) -> Box<dyn Block> {
        self.objc
    }

}
