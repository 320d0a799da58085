//! Runnable demo of the "non-serializable ancestor" deserialization pitfall.
//!
//! A serializable type whose non-serializable ancestor offers no
//! zero-argument constructor can be encoded, but decoding it fails at the
//! point where the decoder has to materialize that ancestor. `Raspberry`
//! (serializable) composes `Fruit` (not serializable, no zero-argument
//! constructor), so `ObjectInputStream::read_object` always fails with
//! `SystemError::ClassInstantiation`. The demo exhibits the failure, it does
//! not work around it.

pub mod bytes_serializable;
pub mod error;
pub mod models;
pub mod stream;
