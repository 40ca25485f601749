//! Helper macro for declaring domain port error enums.
//!
//! Port errors are small field-carrying enums with a display message per
//! variant and a snake_case constructor that coerces its arguments via
//! `Into`, so adapters can pass `&str` where the variant stores `String`.

macro_rules! define_port_error {
    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
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
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant () () $( $field : $ty, )*);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for constructor generation.

    define_port_error! {
        pub enum ExamplePortError {
            Transport { message: String } => "transport failed: {message}",
            Status { status: u16 } => "unexpected status {status}",
            Decode { message: String, status: u16 } => "decode failed ({status}): {message}",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = ExamplePortError::transport("connection refused");
        assert_eq!(err.to_string(), "transport failed: connection refused");
    }

    #[test]
    fn constructors_preserve_non_string_types() {
        let err = ExamplePortError::status(502_u16);
        assert_eq!(err.to_string(), "unexpected status 502");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = ExamplePortError::decode("truncated body", 200_u16);
        assert_eq!(err.to_string(), "decode failed (200): truncated body");
    }
}
