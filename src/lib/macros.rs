macro_rules! getter {
    (ref $name:ident: $kind:ty) => (
        #[inline(always)]
        pub fn $name(&self) -> &$kind {
            &self.$name
        }
    );
    ($name:ident: $kind:ty) => (
        #[inline(always)]
        pub fn $name(&self) -> $kind {
            self.$name
        }
    );
}

macro_rules! raise(
    ($message:expr) => (return Err($crate::Error::new($message)));
    ($($arg:tt)*) => (return Err($crate::Error::new(format!($($arg)*))));
);

macro_rules! some(
    ($option:expr) => (match $option {
        Some(value) => value,
        _ => raise!("encountered a logic error"),
    });
    ($option:expr, $($arg:tt)+) => (match $option {
        Some(value) => value,
        _ => raise!($($arg)*),
    });
);
