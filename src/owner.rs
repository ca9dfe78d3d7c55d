use std::cell::RefCell;
use std::collections::HashMap;

use crate::entry::PlatformMetadata;

pub trait OwnerLookup {
    fn user_name(&self, uid: u32) -> Option<String>;
    fn group_name(&self, gid: u32) -> Option<String>;
}

/// Resolves ids against the system user and group databases.
/// Lookups are cached for the lifetime of the value.
#[derive(Default)]
pub struct SystemOwners {
    users: RefCell<HashMap<u32, Option<String>>>,
    groups: RefCell<HashMap<u32, Option<String>>>,
}

impl SystemOwners {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OwnerLookup for SystemOwners {
    fn user_name(&self, uid: u32) -> Option<String> {
        self.users
            .borrow_mut()
            .entry(uid)
            .or_insert_with(|| sys::user_name(uid))
            .clone()
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        self.groups
            .borrow_mut()
            .entry(gid)
            .or_insert_with(|| sys::group_name(gid))
            .clone()
    }
}

/// Owner and group columns for one entry.
///
/// The group falls back to the owner's user name before the numeric gid.
pub fn resolve_owner_group(
    platform: Option<&PlatformMetadata>,
    lookup: &dyn OwnerLookup,
) -> (String, String) {
    let Some(platform) = platform else {
        return ("?".to_string(), "?".to_string());
    };

    let user = lookup.user_name(platform.uid);
    let owner = user.clone().unwrap_or_else(|| platform.uid.to_string());
    let group = lookup
        .group_name(platform.gid)
        .or(user)
        .unwrap_or_else(|| platform.gid.to_string());

    (owner, group)
}

#[cfg(unix)]
mod sys {
    use std::ffi::CStr;
    use std::ptr;

    const INITIAL_BUF: usize = 1024;
    const MAX_BUF: usize = 1 << 20;

    pub fn user_name(uid: u32) -> Option<String> {
        let mut buf = vec![0 as libc::c_char; INITIAL_BUF];
        loop {
            let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
            let mut result: *mut libc::passwd = ptr::null_mut();
            let rc = unsafe {
                libc::getpwuid_r(
                    uid as libc::uid_t,
                    &mut pwd,
                    buf.as_mut_ptr(),
                    buf.len(),
                    &mut result,
                )
            };
            if rc == libc::ERANGE && buf.len() < MAX_BUF {
                buf.resize(buf.len() * 2, 0);
                continue;
            }
            if rc != 0 || result.is_null() || pwd.pw_name.is_null() {
                return None;
            }
            let name = unsafe { CStr::from_ptr(pwd.pw_name) };
            return Some(name.to_string_lossy().into_owned());
        }
    }

    pub fn group_name(gid: u32) -> Option<String> {
        let mut buf = vec![0 as libc::c_char; INITIAL_BUF];
        loop {
            let mut grp: libc::group = unsafe { std::mem::zeroed() };
            let mut result: *mut libc::group = ptr::null_mut();
            let rc = unsafe {
                libc::getgrgid_r(
                    gid as libc::gid_t,
                    &mut grp,
                    buf.as_mut_ptr(),
                    buf.len(),
                    &mut result,
                )
            };
            if rc == libc::ERANGE && buf.len() < MAX_BUF {
                buf.resize(buf.len() * 2, 0);
                continue;
            }
            if rc != 0 || result.is_null() || grp.gr_name.is_null() {
                return None;
            }
            let name = unsafe { CStr::from_ptr(grp.gr_name) };
            return Some(name.to_string_lossy().into_owned());
        }
    }
}

#[cfg(not(unix))]
mod sys {
    pub fn user_name(_uid: u32) -> Option<String> {
        None
    }

    pub fn group_name(_gid: u32) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedOwners {
        users: HashMap<u32, &'static str>,
        groups: HashMap<u32, &'static str>,
    }

    impl OwnerLookup for FixedOwners {
        fn user_name(&self, uid: u32) -> Option<String> {
            self.users.get(&uid).map(|s| s.to_string())
        }

        fn group_name(&self, gid: u32) -> Option<String> {
            self.groups.get(&gid).map(|s| s.to_string())
        }
    }

    fn platform(uid: u32, gid: u32) -> PlatformMetadata {
        PlatformMetadata {
            nlink: 1,
            uid,
            gid,
            block_size: 4096,
            blocks: 8,
        }
    }

    fn owners() -> FixedOwners {
        FixedOwners {
            users: HashMap::from([(1000, "alice")]),
            groups: HashMap::from([(100, "users")]),
        }
    }

    #[test]
    fn test_missing_platform_metadata() {
        assert_eq!(
            resolve_owner_group(None, &owners()),
            ("?".to_string(), "?".to_string())
        );
    }

    #[test]
    fn test_both_resolve() {
        let p = platform(1000, 100);
        assert_eq!(
            resolve_owner_group(Some(&p), &owners()),
            ("alice".to_string(), "users".to_string())
        );
    }

    #[test]
    fn test_group_falls_back_to_owner_name() {
        let p = platform(1000, 555);
        assert_eq!(
            resolve_owner_group(Some(&p), &owners()),
            ("alice".to_string(), "alice".to_string())
        );
    }

    #[test]
    fn test_numeric_fallbacks() {
        let p = platform(4242, 555);
        assert_eq!(
            resolve_owner_group(Some(&p), &owners()),
            ("4242".to_string(), "555".to_string())
        );

        let p = platform(4242, 100);
        assert_eq!(
            resolve_owner_group(Some(&p), &owners()),
            ("4242".to_string(), "users".to_string())
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_system_root_lookup_is_cached() {
        let owners = SystemOwners::new();
        let first = owners.user_name(0);
        assert_eq!(owners.user_name(0), first);
        assert_eq!(owners.users.borrow().len(), 1);
    }
}
