use std::fmt;

/// One kind of exported key material, stored as `<key-id>.<suffix>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyMaterial {
    /// All public keys bound to the master key.
    Public,
    /// All secret keys, the master secret included.
    Secret,
    /// Secret subkeys only; the master secret is left out.
    SecretSubkeys,
}

impl KeyMaterial {
    /// Export order and archive member order.
    pub const ALL: [KeyMaterial; 3] = [Self::Public, Self::Secret, Self::SecretSubkeys];

    /// Filename extension (without the dot) used for this member.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Public => "pub",
            Self::Secret => "priv",
            Self::SecretSubkeys => "subkeys",
        }
    }

    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.suffix() == suffix)
    }

    /// Archive member name for the given key id.
    pub fn member_name(self, key_id: &str) -> String {
        format!("{key_id}.{}", self.suffix())
    }
}

impl fmt::Display for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Public => "public keys",
            Self::Secret => "secret keys",
            Self::SecretSubkeys => "secret subkeys",
        };
        f.write_str(label)
    }
}
