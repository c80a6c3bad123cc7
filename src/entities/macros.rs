//! Macro for reducing boilerplate when declaring records
//!
//! A record impl is three mechanical items: the id accessor, the
//! searchable field list, and the field-name dispatch. This macro
//! generates all three from a field list; types with a wider search
//! haystack (tickets match on their display id too) implement
//! [`Record`](crate::core::record::Record) by hand instead.

/// Implement [`Record`](crate::core::record::Record) for a struct with
/// an `id: RecordId` field
///
/// Every listed field must convert into a
/// [`FieldValue`](crate::core::field::FieldValue) via `From`.
///
/// # Example
/// ```rust,ignore
/// impl_record!(
///     Member,
///     searchable = [name, email],
///     fields = [name, email, plan, status, joined]
/// );
/// ```
#[macro_export]
macro_rules! impl_record {
    ($ty:ident, searchable = [$($s:ident),* $(,)?], fields = [$($f:ident),* $(,)?]) => {
        impl $crate::core::record::Record for $ty {
            fn record_id(&self) -> &$crate::core::record::RecordId {
                &self.id
            }

            fn searchable_fields() -> &'static [&'static str] {
                &[$(stringify!($s)),*]
            }

            fn field(&self, name: &str) -> $crate::core::field::FieldValue {
                match name {
                    $(stringify!($f) => $crate::core::field::FieldValue::from(self.$f.clone()),)*
                    _ => $crate::core::field::FieldValue::Null,
                }
            }
        }
    };
}
