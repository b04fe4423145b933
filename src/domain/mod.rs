//! Domain logic - commit grammar, policy rules and versioning, independent of git

pub mod case_set;
pub mod classification;
pub mod commit;
pub mod footer;
pub mod policy;
pub mod summary;
pub mod version;

pub use case_set::CaseInsensitiveSet;
pub use classification::Classification;
pub use commit::{strip_comments, Commit};
pub use footer::{Footer, FooterSeparator};
pub use policy::Policy;
pub use summary::Summary;
pub use version::Version;
