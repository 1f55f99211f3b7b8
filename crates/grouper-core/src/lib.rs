pub mod error;
pub mod equality;
pub mod settings;
pub mod group;
pub mod engine;
pub mod ext;
pub mod fixtures;
pub mod demos;

pub use error::{GroupingError, Result};

pub use equality::{AnagramEquality, CaseInsensitiveEquality, DefaultEquality, FnEquality, KeyEquality};
pub use group::{Group, GroupCollection};
pub use engine::{group_by, group_by_with, nested_group_by, try_group_by, GroupingEngine};
pub use settings::GroupingSettings;
pub use ext::GroupByExt;
pub use fixtures::{Product, SampleData, SampleSource};
