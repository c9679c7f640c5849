//! The Gravel container: a growable contiguous array over a pluggable
//! allocator.
//!
//! [`Array<T, A>`] owns a single buffer and a live prefix of it, grows by
//! amortized 1.5× through the policy in `gravel-core`, and relocates by
//! block move through the primitives in `gravel-alloc`. Capacity and
//! allocation failures are reported through [`ArrayError`]; position
//! misuse panics.
//!
//! ```
//! use gravel_array::{array, Array};
//!
//! let mut primes = array![2, 3, 5];
//! primes.push(7).unwrap();
//! primes.insert(0, 1).unwrap();
//! assert_eq!(primes, [1, 2, 3, 5, 7]);
//! assert_eq!(primes.remove(0), 1);
//! assert_eq!(primes.at(3), Ok(&7));
//! assert!(primes.at(4).is_err());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod error;
pub mod iter;
mod macros;

pub use array::Array;
pub use error::ArrayError;
pub use iter::IntoIter;
