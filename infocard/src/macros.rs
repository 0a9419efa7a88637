#[cfg(feature = "tracing")]
macro_rules! ictrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "infocard", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ictrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! icdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "infocard", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! icdebug {
    ($($tt:tt)*) => {};
}
