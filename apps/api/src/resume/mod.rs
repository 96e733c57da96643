// Resume sections: positional in-memory store, validation, CRUD handlers,
// and the read-only spellcheck and suggestion passes.

pub mod dictionary;
pub mod handlers;
pub mod prompts;
pub mod spellcheck;
pub mod store;
pub mod suggestions;
pub mod validation;
