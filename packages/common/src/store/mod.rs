mod error;
mod expand;
mod traits;

pub mod memory;

pub use error::StoreError;
pub use expand::{expand_student, expand_students, expand_submissions, expand_test_marks};
pub use memory::MemoryStore;
pub use traits::Store;
