
macro_rules! transaction_register {
    ( $( $tty:ident )+ ) => {

        pub fn transaction_create(buf: &[u8]) -> Ret<(Box<dyn Transaction>, usize)> {
            let ty = bufeatone(buf)?;
            match ty {
                $(
                    <$tty>::TYPE => {
                        let (trs, sk) = <$tty>::create(buf)?;
                        Ok((Box::new(trs), sk))
                    },
                )+
                _ => errf!("transaction type '{}' not find", ty)
            }
        }

    };
}


// Trs list, count kept in the block head
combi_dynvec!{ DynVecTransaction,
    Uint4, Transaction, transaction_create
}
