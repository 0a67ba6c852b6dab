use std::any;

/// Returns the unqualified name of `T`, e.g. `"CaughtPanic"` for
/// `outcome_types::invoke::CaughtPanic`.
///
/// [`any::type_name`] produces a fully qualified path; failure rendering only wants
/// the last segment, the way a class name would be printed. Generic arguments (and
/// anything else after a `<`) are kept as-is.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);

    match base.rfind("::") {
        Some(index) => &full[index + 2..],
        None => full,
    }
}
