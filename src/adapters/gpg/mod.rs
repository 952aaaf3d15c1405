pub mod gpg_binary;
