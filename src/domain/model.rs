use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub group: String,
}

impl Student {
    pub fn new(
        id: u64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            group: group.into(),
        }
    }

    /// First and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// Natural order is ascending by id. Ids are unique within any roster
// handed to the query service, so comparing by id alone is total there.
impl Ord for Student {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl PartialOrd for Student {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_single_space() {
        let student = Student::new(7, "Ann", "Lee", "M3435");
        assert_eq!(student.full_name(), "Ann Lee");
    }

    #[test]
    fn test_natural_order_is_by_id() {
        let a = Student::new(1, "Zoe", "Zimmer", "M3439");
        let b = Student::new(2, "Abe", "Abbot", "M3435");
        assert!(a < b);
    }
}
