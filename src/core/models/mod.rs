pub mod key_bundle;
pub mod key_material;
pub mod key_record;
