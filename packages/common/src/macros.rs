//! Macros for writing result handlers as bare match arms

/// Build a `Result` handler closure from match arms
///
/// `on_result_handler!(|result| { Ok(bytes) => bytes, Err(_) => Vec::new() })`
#[macro_export]
macro_rules! on_result_handler {
    (|$param:ident| { $($arms:tt)* }) => {
        |$param| match $param { $($arms)* }
    };
}
