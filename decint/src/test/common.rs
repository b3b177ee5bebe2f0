use lazy_static::lazy_static;

lazy_static! {
    pub static ref BLESS: bool = std::env::var("BLESS") == Ok("1".into());
}

/// Fails a test with a report made of formatted lines.
macro_rules! fail {
    ($($fmt:expr $(, $arg:expr)*;)*) => {
        libtest_mimic::Outcome::Failed {
            msg: Some(vec![$(format!($fmt $(, $arg)*)),*].join("\n")),
        }
    };
}

macro_rules! real_path {
    ($path:expr) => {
        format!("decint/{}", $path)
    };
}
