use crate::domain::model::Student;
use std::collections::{BTreeMap, BTreeSet};

/// Read-only queries over a roster of students.
///
/// Implementations never mutate the input slice; every method allocates
/// and returns a fresh value. An empty roster yields an empty result
/// (empty string for [`min_student_first_name`]).
///
/// [`min_student_first_name`]: StudentQuery::min_student_first_name
pub trait StudentQuery {
    /// First names, preserving input order and length.
    fn first_names(&self, students: &[Student]) -> Vec<String>;

    /// Last names, preserving input order and length.
    fn last_names(&self, students: &[Student]) -> Vec<String>;

    /// Group names, preserving input order and length.
    fn groups(&self, students: &[Student]) -> Vec<String>;

    /// Full names (`"first last"`), preserving input order and length.
    fn full_names(&self, students: &[Student]) -> Vec<String>;

    /// Distinct first names in ascending order.
    fn distinct_first_names(&self, students: &[Student]) -> BTreeSet<String>;

    /// First name of the student with the minimal id, or `""` for an
    /// empty roster.
    fn min_student_first_name(&self, students: &[Student]) -> String;

    /// Students sorted ascending by id.
    fn sort_students_by_id(&self, students: &[Student]) -> Vec<Student>;

    /// Students sorted by last name, then first name, then id.
    fn sort_students_by_name(&self, students: &[Student]) -> Vec<Student>;

    /// Students with the given first name, ordered as
    /// [`sort_students_by_name`](StudentQuery::sort_students_by_name).
    fn find_students_by_first_name(&self, students: &[Student], name: &str) -> Vec<Student>;

    /// Students with the given last name, ordered by name.
    fn find_students_by_last_name(&self, students: &[Student], name: &str) -> Vec<Student>;

    /// Students in the given group, ordered by name.
    fn find_students_by_group(&self, students: &[Student], group: &str) -> Vec<Student>;

    /// Last name mapped to the smallest first name sharing it, restricted
    /// to students in the given group.
    fn find_student_names_by_group(
        &self,
        students: &[Student],
        group: &str,
    ) -> BTreeMap<String, String>;
}
