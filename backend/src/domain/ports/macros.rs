//! Helper macro for repository error enums.
//!
//! Each variant gets a snake_case constructor accepting `impl Into<T>` for
//! every field, so adapters can write `UserRepositoryError::query(err.to_string())`.

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
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
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
        pub enum SampleRepositoryError {
            Connection { message: String } => "connection failed: {message}",
            Conflict { message: String, attempts: u32 } => "conflict after {attempts}: {message}",
        }
    }

    #[test]
    fn constructors_convert_string_fields() {
        let err = SampleRepositoryError::connection("refused");
        assert_eq!(err.to_string(), "connection failed: refused");
    }

    #[test]
    fn constructors_keep_other_field_types() {
        let err = SampleRepositoryError::conflict("duplicate key", 2_u32);
        assert_eq!(err.to_string(), "conflict after 2: duplicate key");
        assert!(matches!(
            err,
            SampleRepositoryError::Conflict { attempts: 2, .. }
        ));
    }
}
