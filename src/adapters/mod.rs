pub mod archive;
pub mod gpg;
