#[macro_export]
macro_rules! impl_string_newtype {
    ($name:ty) => {
        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
    };
    ($name:ty, default = $default:expr) => {
        $crate::impl_string_newtype!($name);

        impl Default for $name {
            fn default() -> Self {
                Self::new($default)
            }
        }
    };
}
