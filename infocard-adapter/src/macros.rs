#[cfg(feature = "tracing")]
macro_rules! iadebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "infocard_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! iadebug {
    ($($tt:tt)*) => {};
}
