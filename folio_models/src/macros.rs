/// Declares a validated string newtype that can also be built from a `&str`.
macro_rules! nutype_string {
    ($(#[doc = $doc:literal])* $ident:ident ( validate( $($validate:tt)* ) )) => {
        $(#[doc = $doc])*
        #[::nutype::nutype(
            validate($($validate)*),
            derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
        )]
        // `TryFrom<&str>` is generated by nutype's `TryFrom` derive.
        pub struct $ident(String);
    };
}

pub(crate) use nutype_string;
