pub mod degradation_event;
pub mod key_descriptor;
pub mod mapping;
pub mod policy_chunk;
pub mod suggestion;
pub mod unknown_field;

pub use degradation_event::DegradationEvent;
pub use key_descriptor::KeyDescriptor;
pub use mapping::{MappingCandidate, SourcePhrase};
pub use policy_chunk::PolicyChunk;
pub use suggestion::KeySuggestion;
pub use unknown_field::UnknownField;
