
pub type Ret<T> = Result<T, Error>;
pub type Rerr = Ret<()>;


#[macro_export]
macro_rules! err {
    ($tip:expr) => { Err(($tip).to_string()) };
}

#[macro_export]
macro_rules! errf {
    ($($arg:tt)+) => { Err(format!($($arg)+)) };
}

// programmer error, must never happen
#[macro_export]
macro_rules! never {
    () => { unreachable!("never happen") };
}

#[macro_export]
macro_rules! must_have {
    ($tip:expr, $opt:expr) => {
        match $opt {
            Some(v) => v,
            None => return errf!("not find {}", $tip),
        }
    };
}
