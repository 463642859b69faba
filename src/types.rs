// Typedef Real = f32/f64

#[cfg(any(feature = "f32", not(feature = "f64")))]
pub use std::f32::*;
#[cfg(any(feature = "f32", not(feature = "f64")))]
pub type Real = f32;

#[cfg(all(feature = "f64", not(feature = "f32")))]
pub use std::f64::*;
#[cfg(all(feature = "f64", not(feature = "f32")))]
pub type Real = f64;

// Extension traits for SoA data types

pub trait Len {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait AsSlice<'a>: Len {
    type Output;
    fn as_slice(&'a self) -> Self::Output;
    fn split_at(&'a self, mid: usize) -> (Self::Output, Self::Output);
}

pub trait AsSliceMut<'a>: Len {
    type Output;
    fn as_mut_slice(&'a mut self) -> Self::Output;
    fn split_at_mut(&'a mut self, mid: usize) -> (Self::Output, Self::Output);
}

// Macros for implementing SoA data types.
//
// Every field vector of a SoA value has the same length, so `len` reads the
// first field and `split_at` splits all fields at the same index.

macro_rules! impl_struct_of_array {
    (
        $(#[$vec_meta:meta])* $vec_vis:vis $vec_name:ident,
        $(#[$slice_meta:meta])* $slice_vis:vis $slice_name:ident,
        $(#[$slice_mut_meta:meta])* $slice_mut_vis:vis $slice_mut_name:ident,
        {
            $(#[$first_doc:meta])* $first_vis:vis $first:ident : $first_type:ty,
            $($(#[$field_doc:meta])* $field_vis:vis $field_name:ident : $field_type:ty),* $(,)*
        }
    ) => {
        $(#[$vec_meta])*
        #[derive(Default)]
        $vec_vis struct $vec_name {
            $(#[$first_doc])*
            $first_vis $first: Vec<$first_type>,
            $(
                $(#[$field_doc])*
                $field_vis $field_name: Vec<$field_type>,
            )*
        }

        $(#[$slice_meta])*
        #[derive(Copy, Clone, Default)]
        $slice_vis struct $slice_name<'a> {
            $(#[$first_doc])*
            $first_vis $first: &'a [$first_type],
            $(
                $(#[$field_doc])*
                $field_vis $field_name: &'a [$field_type],
            )*
        }

        $(#[$slice_mut_meta])*
        #[derive(Default)]
        $slice_mut_vis struct $slice_mut_name<'a> {
            $(#[$first_doc])*
            $first_vis $first: &'a mut [$first_type],
            $(
                $(#[$field_doc])*
                $field_vis $field_name: &'a mut [$field_type],
            )*
        }

        impl $vec_name {
            pub fn zeros(len: usize) -> Self {
                $vec_name {
                    $first: vec![Default::default(); len],
                    $(
                        $field_name: vec![Default::default(); len],
                    )*
                }
            }

            /// Checks that every field holds the same number of elements.
            pub fn is_consistent(&self) -> bool {
                let n = self.$first.len();
                true $(&& self.$field_name.len() == n)*
            }
        }

        impl Len for $vec_name {
            fn len(&self) -> usize {
                self.$first.len()
            }
        }

        impl Len for $slice_name<'_> {
            fn len(&self) -> usize {
                self.$first.len()
            }
        }

        impl Len for $slice_mut_name<'_> {
            fn len(&self) -> usize {
                self.$first.len()
            }
        }

        impl<'a> AsSlice<'a> for $vec_name {
            type Output = $slice_name<'a>;

            fn as_slice(&'a self) -> Self::Output {
                $slice_name {
                    $first: &self.$first[..],
                    $(
                        $field_name: &self.$field_name[..],
                    )*
                }
            }

            fn split_at(&'a self, mid: usize) -> (Self::Output, Self::Output) {
                self.as_slice().split_at(mid)
            }
        }

        impl<'a> AsSliceMut<'a> for $vec_name {
            type Output = $slice_mut_name<'a>;

            fn as_mut_slice(&'a mut self) -> Self::Output {
                $slice_mut_name {
                    $first: &mut self.$first[..],
                    $(
                        $field_name: &mut self.$field_name[..],
                    )*
                }
            }

            fn split_at_mut(&'a mut self, mid: usize) -> (Self::Output, Self::Output) {
                let (first_lo, first_hi) = self.$first.split_at_mut(mid);
                $(
                    let $field_name = self.$field_name.split_at_mut(mid);
                )*
                (
                    $slice_mut_name {
                        $first: first_lo,
                        $($field_name: $field_name.0,)*
                    },
                    $slice_mut_name {
                        $first: first_hi,
                        $($field_name: $field_name.1,)*
                    },
                )
            }
        }

        impl<'a> $slice_name<'a> {
            pub fn split_at(self, mid: usize) -> (Self, Self) {
                let (first_lo, first_hi) = self.$first.split_at(mid);
                $(
                    let $field_name = self.$field_name.split_at(mid);
                )*
                (
                    $slice_name {
                        $first: first_lo,
                        $($field_name: $field_name.0,)*
                    },
                    $slice_name {
                        $first: first_hi,
                        $($field_name: $field_name.1,)*
                    },
                )
            }

            pub fn to_vec(&self) -> $vec_name {
                $vec_name {
                    $first: self.$first.to_vec(),
                    $(
                        $field_name: self.$field_name.to_vec(),
                    )*
                }
            }
        }
    };
}

// -- end of file --
