
pub fn bytes_from_hex(stuff: &[u8], size: usize) -> Ret<Vec<u8>> {
    let Ok(bts) = hex::decode(stuff) else {
        return errf!("hex format error")
    };
    if bts.len() != size {
        return errf!("hex data size need {} but got {}", size, bts.len())
    }
    Ok(bts)
}
