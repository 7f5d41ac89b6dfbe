pub mod emoji_status;
