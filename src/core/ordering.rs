use crate::domain::model::Student;
use std::cmp::Ordering;

/// Natural order: ascending by id.
pub fn by_id(a: &Student, b: &Student) -> Ordering {
    a.id.cmp(&b.id)
}

/// Name order: last name, then first name, then id as the final
/// tie-breaker.
pub fn by_name(a: &Student, b: &Student) -> Ordering {
    a.last_name
        .cmp(&b.last_name)
        .then_with(|| a.first_name.cmp(&b.first_name))
        .then_with(|| a.id.cmp(&b.id))
}
