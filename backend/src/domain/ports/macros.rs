//! Helper macro for declaring port error enums.
//!
//! Each variant carries named fields and a display message. The macro
//! derives `thiserror::Error` and emits a snake_case constructor per variant
//! whose parameters accept anything convertible into the field type.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),* },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = concat!("Construct [`", stringify!($name), "::", stringify!($variant), "`].")]
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                        Self::$variant { $($field: $field.into()),* }
                    }
                }
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SamplePortError {
            Offline { message: String } => "offline: {message}",
            Throttled { retry_after: u32 } => "retry in {retry_after}s",
            Partial { message: String, written: u32 } => "{message} after {written} writes",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        assert_eq!(SamplePortError::offline("down").to_string(), "offline: down");
    }

    #[test]
    fn constructors_keep_numeric_fields() {
        assert_eq!(
            SamplePortError::throttled(5_u32).to_string(),
            "retry in 5s"
        );
    }

    #[test]
    fn constructors_support_several_fields() {
        assert_eq!(
            SamplePortError::partial("lock lost", 3_u32).to_string(),
            "lock lost after 3 writes"
        );
    }
}
