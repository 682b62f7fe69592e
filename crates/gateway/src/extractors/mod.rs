//! Request extractors that reject with the JSON error body.

mod validated_json;

pub use validated_json::{FormJson, ValidatedJson};
