pub mod error;
pub mod grouper;
pub mod input;
pub mod key;
pub mod render;

pub use error::InputError;
pub use grouper::{group_anagrams, AnagramGroup, AnagramGrouper, GroupOrder};
pub use input::{parse_words, InputFormat};
pub use key::{are_anagrams, CanonicalKey, KeyMode};
pub use render::{render_groups, OutputFormat};
