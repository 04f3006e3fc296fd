use crate::core::ordering;
use crate::domain::model::Student;
use crate::domain::ports::StudentQuery;
use std::collections::{BTreeMap, BTreeSet};

/// Stateless implementation of [`StudentQuery`].
///
/// Every operation is a pure function of its input slice; the service
/// holds nothing between calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct StudentQueryService;

impl StudentQueryService {
    pub fn new() -> Self {
        Self
    }

    fn project(&self, students: &[Student], field: fn(&Student) -> String) -> Vec<String> {
        students.iter().map(field).collect()
    }

    // Shared by the find_students_by_* operations: keep exact matches on
    // the keyed field, then order them by name.
    fn find_sorted(
        &self,
        students: &[Student],
        field: fn(&Student) -> &str,
        wanted: &str,
    ) -> Vec<Student> {
        let mut found: Vec<Student> = students
            .iter()
            .filter(|s| field(s) == wanted)
            .cloned()
            .collect();
        found.sort_by(ordering::by_name);

        tracing::debug!("matched {} of {} students", found.len(), students.len());
        found
    }
}

impl StudentQuery for StudentQueryService {
    fn first_names(&self, students: &[Student]) -> Vec<String> {
        self.project(students, |s| s.first_name.clone())
    }

    fn last_names(&self, students: &[Student]) -> Vec<String> {
        self.project(students, |s| s.last_name.clone())
    }

    fn groups(&self, students: &[Student]) -> Vec<String> {
        self.project(students, |s| s.group.clone())
    }

    fn full_names(&self, students: &[Student]) -> Vec<String> {
        self.project(students, |s| s.full_name())
    }

    fn distinct_first_names(&self, students: &[Student]) -> BTreeSet<String> {
        students.iter().map(|s| s.first_name.clone()).collect()
    }

    fn min_student_first_name(&self, students: &[Student]) -> String {
        students
            .iter()
            .min()
            .map(|s| s.first_name.clone())
            .unwrap_or_default()
    }

    fn sort_students_by_id(&self, students: &[Student]) -> Vec<Student> {
        let mut sorted = students.to_vec();
        sorted.sort_by(ordering::by_id);
        sorted
    }

    fn sort_students_by_name(&self, students: &[Student]) -> Vec<Student> {
        let mut sorted = students.to_vec();
        sorted.sort_by(ordering::by_name);
        sorted
    }

    fn find_students_by_first_name(&self, students: &[Student], name: &str) -> Vec<Student> {
        self.find_sorted(students, |s| &s.first_name, name)
    }

    fn find_students_by_last_name(&self, students: &[Student], name: &str) -> Vec<Student> {
        self.find_sorted(students, |s| &s.last_name, name)
    }

    fn find_students_by_group(&self, students: &[Student], group: &str) -> Vec<Student> {
        self.find_sorted(students, |s| &s.group, group)
    }

    fn find_student_names_by_group(
        &self,
        students: &[Student],
        group: &str,
    ) -> BTreeMap<String, String> {
        // Single pass; on a last-name collision keep the smaller first
        // name, independent of encounter order.
        let mut names: BTreeMap<String, String> = BTreeMap::new();
        for student in students.iter().filter(|s| s.group == group) {
            names
                .entry(student.last_name.clone())
                .and_modify(|first| {
                    if student.first_name < *first {
                        *first = student.first_name.clone();
                    }
                })
                .or_insert_with(|| student.first_name.clone());
        }

        tracing::debug!("group {} has {} distinct last names", group, names.len());
        names
    }
}
