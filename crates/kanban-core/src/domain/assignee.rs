//! Assignee Roster
//!
//! Fixed set of people a task can be assigned to.

use serde::Serialize;

/// A person tasks can be assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Assignee {
    pub id: &'static str,
    pub name: &'static str,
}

impl Assignee {
    /// Up to two uppercase initials for avatar badges ("Ilhom" -> "I", "Ann Lee" -> "AL")
    pub fn initials(name: &str) -> String {
        let words: Vec<&str> = name.split_whitespace().collect();
        let first = |w: &str| w.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
        match words.as_slice() {
            [] => "?".to_string(),
            [only] => first(only),
            [head, .., last] => format!("{}{}", first(head), first(last)),
        }
    }
}

pub const ASSIGNEES: &[Assignee] = &[
    Assignee { id: "user-1", name: "Ilhom" },
    Assignee { id: "user-2", name: "Parvina" },
    Assignee { id: "user-3", name: "Madina" },
    Assignee { id: "user-4", name: "Lobar" },
    Assignee { id: "user-5", name: "Somon" },
];

/// Look up an assignee by id
pub fn find_assignee(id: &str) -> Option<&'static Assignee> {
    ASSIGNEES.iter().find(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_assignee() {
        assert_eq!(find_assignee("user-3").map(|a| a.name), Some("Madina"));
        assert!(find_assignee("none").is_none());
    }

    #[test]
    fn test_initials() {
        assert_eq!(Assignee::initials("Ilhom"), "I");
        assert_eq!(Assignee::initials("ann marie lee"), "AL");
        assert_eq!(Assignee::initials("   "), "?");
    }
}
