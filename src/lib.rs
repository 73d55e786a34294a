#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

mod arena;
pub mod dictionary;
pub mod error;
pub mod value;

pub use dictionary::Dictionary;
pub use dictionary::Entry;
pub use dictionary::IntoIter;
pub use dictionary::Iter;
pub use dictionary::Verdict;
pub use error::DictError;
pub use error::Result;
pub use value::Callable;
pub use value::ObjectFields;
pub use value::TypeTag;
pub use value::Value;
