
#[macro_export]
macro_rules! bufcut {
    ( $buf:expr, $l:expr, $r:expr ) => {
        $buf[$l..$r].try_into().unwrap()
    };
}


pub fn bufeat(buf: &[u8], n: usize) -> Ret<Vec<u8>> {
    bufeat_ref(buf, n).map(|v|v.to_vec())
}


pub fn bufeat_ref(buf: &[u8], n: usize) -> Ret<&[u8]> {
    let buflen = buf.len();
    match n > buflen {
        false => Ok(&buf[..n]),
        true => errf!("buf length too short need {} but got {}", n, buflen)
    }
}


pub fn bufeatone(buf: &[u8]) -> Ret<u8> {
    match buf.len() >= 1 {
        true => Ok(buf[0]),
        false => Err(s!("buf length too short"))
    }
}
