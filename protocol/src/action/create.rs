
fn cut_kind(buf: &[u8]) -> Ret<u16> {
    let mut kind = Uint2::default();
    kind.parse(buf)?;
    Ok(*kind)
}


pub fn action_create(buf: &[u8]) -> Ret<(Box<dyn Action>, usize)> {
    let kid = cut_kind(buf)?;
    crate::setup::do_action_create(kid, buf)
}


/*
* list define
*/
combi_dynlist!{ DynListActionW4,
    Uint4, Action, action_create
}
