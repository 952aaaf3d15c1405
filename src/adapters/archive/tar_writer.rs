use std::path::Path;

use tar::{EntryType, Header};

use crate::core::errors::Result;
use crate::support::archive_handle::{PERM_USER_RW_ONLY, with_archive_writer};

/// Identity recorded as owner of every archive member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberOwner {
    pub uid: u64,
    pub gid: u64,
    pub username: Option<String>,
    pub groupname: Option<String>,
}

impl MemberOwner {
    /// The user and group running this process.
    #[cfg(unix)]
    pub fn current() -> Self {
        Self {
            uid: u64::from(users::get_current_uid()),
            gid: u64::from(users::get_current_gid()),
            username: users::get_current_username().map(|n| n.to_string_lossy().into_owned()),
            groupname: users::get_current_groupname().map(|n| n.to_string_lossy().into_owned()),
        }
    }

    #[cfg(not(unix))]
    pub fn current() -> Self {
        Self {
            uid: 0,
            gid: 0,
            username: None,
            groupname: None,
        }
    }
}

/// Write `members` (name, content) as a flat `.tar.gz` at `path`.
///
/// Every member is a regular file with owner-only permissions, owned by
/// the current user and stamped with the current time. Names are taken
/// as given; callers must not pass names with directory parts.
pub fn write_key_archive(path: &Path, members: &[(String, Vec<u8>)]) -> Result<()> {
    let owner = MemberOwner::current();
    let mtime = u64::try_from(chrono::Utc::now().timestamp()).unwrap_or(0);

    with_archive_writer(path, |builder| {
        for (name, content) in members {
            let mut header = Header::new_gnu();
            header.set_entry_type(EntryType::Regular);
            header.set_size(content.len() as u64);
            header.set_mode(PERM_USER_RW_ONLY);
            header.set_mtime(mtime);
            header.set_uid(owner.uid);
            header.set_gid(owner.gid);
            if let Some(username) = &owner.username {
                header.set_username(username)?;
            }
            if let Some(groupname) = &owner.groupname {
                header.set_groupname(groupname)?;
            }
            builder.append_data(&mut header, name, content.as_slice())?;
            tracing::debug!(member = %name, size = content.len(), "added archive member");
        }
        Ok(())
    })
}
