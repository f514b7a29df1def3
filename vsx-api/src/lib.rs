pub mod lookup;

pub use lookup::{
    at_most_one, ExtensionLookup, LookupError, LookupResult, VersionLookup,
};
