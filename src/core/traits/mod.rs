pub mod key_tool;
