/// Declares a `usize` newtype used as a typed position.
///
/// The two-argument form also lets the index be used directly on slices and
/// vectors of the second type.
#[macro_export]
macro_rules! define_index_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name(usize);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl $name {
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            pub const fn get(&self) -> usize {
                self.0
            }
        }

        impl From<usize> for $name {
            fn from(index: usize) -> Self {
                Self(index)
            }
        }
    };
    ($name:ident, $t:ty) => {
        $crate::define_index_newtype!($name);

        impl std::ops::Index<$name> for [$t] {
            type Output = $t;
            fn index(&self, index: $name) -> &Self::Output {
                &self[index.get()]
            }
        }

        impl std::ops::Index<$name> for Vec<$t> {
            type Output = $t;
            fn index(&self, index: $name) -> &Self::Output {
                &self[index.get()]
            }
        }

        impl std::ops::IndexMut<$name> for Vec<$t> {
            fn index_mut(&mut self, index: $name) -> &mut Self::Output {
                &mut self[index.get()]
            }
        }
    };
}
