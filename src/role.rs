//! API roles carried in client certificates.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Admin,
    Operator,
    Reader,
    EtcdBackup,
    Impersonator,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::Operator,
        Role::Reader,
        Role::EtcdBackup,
        Role::Impersonator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "os:admin",
            Role::Operator => "os:operator",
            Role::Reader => "os:reader",
            Role::EtcdBackup => "os:etcd:backup",
            Role::Impersonator => "os:impersonator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet(BTreeSet<Role>);

impl RoleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, role: Role) -> bool {
        self.0.insert(role)
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Role names, sorted.
    pub fn strings(&self) -> Vec<String> {
        let mut names: Vec<String> = self.0.iter().map(|r| r.as_str().to_string()).collect();
        names.sort();
        names
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<T: IntoIterator<Item = Role>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Split raw role names into known roles and the leftovers.
///
/// Entries are trimmed and blanks are skipped. Unknown names are returned in
/// input order rather than rejected; the caller decides whether they matter.
pub fn parse<I, S>(items: I) -> (RoleSet, Vec<String>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut roles = RoleSet::new();
    let mut unknown = Vec::new();

    for item in items {
        let item = item.as_ref().trim();
        if item.is_empty() {
            continue;
        }
        match item.parse::<Role>() {
            Ok(role) => {
                roles.insert(role);
            }
            Err(name) => unknown.push(name),
        }
    }

    (roles, unknown)
}
