
/// Group, subgroup and emoji tables built from `emoji-test.txt`
pub mod emoji_tables;
pub mod errors;
pub mod regexes;
#[cfg(feature = "online")]
pub mod online;
