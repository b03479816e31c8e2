
pub fn create(buf: &[u8]) -> Ret<(Box<dyn Block>, usize)> {
    let version = bufeatone(buf)?;
    match version {
        BlockV1::VERSION => {
            let (blk, mvsk) = BlockV1::create(buf)?;
            Ok((Box::new(blk), mvsk))
        }
        _ => errf!("block version '{}' not find", version)
    }
}
