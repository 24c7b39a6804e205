use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::error::StoreError;
use super::traits::Store;
use crate::AssignmentStatus;
use crate::records::{
    AssignmentSubmission, Course, DEFAULT_TOTAL_MARKS, GradeUpdate, NewCourse, NewStudent,
    NewSubmission, NewTestMarks, Student, SubmissionOrder, SubmissionQuery, TestMarks,
};

/// In-process store backed by vectors behind a single lock.
///
/// Used for `memory://` database URLs and in tests. Ids start at 1 per collection.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

#[derive(Default)]
struct Collections {
    courses: Vec<Course>,
    students: Vec<Student>,
    test_marks: Vec<TestMarks>,
    submissions: Vec<AssignmentSubmission>,
}

fn next_id(len: usize) -> i32 {
    len as i32 + 1
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_course(&self, course: NewCourse) -> Result<Course, StoreError> {
        let mut data = self.inner.write().await;
        if data
            .courses
            .iter()
            .any(|c| c.course_code == course.course_code)
        {
            return Err(StoreError::Validation(format!(
                "duplicate course_code: {}",
                course.course_code
            )));
        }

        let record = Course {
            id: next_id(data.courses.len()),
            course_name: course.course_name,
            course_code: course.course_code,
            instructor: course.instructor,
            duration: course.duration,
            description: course.description,
            batch: course.batch,
            students_enrolled: Vec::new(),
            created_at: Utc::now(),
        };
        data.courses.push(record.clone());
        Ok(record)
    }

    async fn list_courses(&self) -> Result<Vec<Course>, StoreError> {
        Ok(self.inner.read().await.courses.clone())
    }

    async fn find_course(&self, id: i32) -> Result<Option<Course>, StoreError> {
        let data = self.inner.read().await;
        Ok(data.courses.iter().find(|c| c.id == id).cloned())
    }

    async fn find_courses(&self, ids: &[i32]) -> Result<Vec<Course>, StoreError> {
        let data = self.inner.read().await;
        Ok(data
            .courses
            .iter()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect())
    }

    async fn insert_student(&self, student: NewStudent) -> Result<Student, StoreError> {
        let mut data = self.inner.write().await;
        for existing in &data.students {
            let clash = if existing.student_id == student.student_id {
                Some(("student_id", &student.student_id))
            } else if existing.email == student.email {
                Some(("email", &student.email))
            } else if existing.clerk_user_id == student.clerk_user_id {
                Some(("clerk_user_id", &student.clerk_user_id))
            } else {
                None
            };
            if let Some((field, value)) = clash {
                return Err(StoreError::Validation(format!("duplicate {field}: {value}")));
            }
        }

        let record = Student {
            id: next_id(data.students.len()),
            student_id: student.student_id,
            name: student.name,
            email: student.email,
            contact: student.contact,
            clerk_user_id: student.clerk_user_id,
            enrolled_courses: Vec::new(),
            created_at: Utc::now(),
        };
        data.students.push(record.clone());
        Ok(record)
    }

    async fn list_students(&self) -> Result<Vec<Student>, StoreError> {
        Ok(self.inner.read().await.students.clone())
    }

    async fn find_student(&self, id: i32) -> Result<Option<Student>, StoreError> {
        let data = self.inner.read().await;
        Ok(data.students.iter().find(|s| s.id == id).cloned())
    }

    async fn find_student_by_code(&self, student_id: &str) -> Result<Option<Student>, StoreError> {
        let data = self.inner.read().await;
        Ok(data
            .students
            .iter()
            .find(|s| s.student_id == student_id)
            .cloned())
    }

    async fn find_students(&self, ids: &[i32]) -> Result<Vec<Student>, StoreError> {
        let data = self.inner.read().await;
        Ok(data
            .students
            .iter()
            .filter(|s| ids.contains(&s.id))
            .cloned()
            .collect())
    }

    async fn enroll(&self, student_id: i32, course_id: i32) -> Result<(), StoreError> {
        let mut data = self.inner.write().await;
        let Collections {
            courses, students, ..
        } = &mut *data;

        let student = students
            .iter_mut()
            .find(|s| s.id == student_id)
            .ok_or_else(|| StoreError::NotFound(format!("Student {student_id}")))?;
        let course = courses
            .iter_mut()
            .find(|c| c.id == course_id)
            .ok_or_else(|| StoreError::NotFound(format!("Course {course_id}")))?;

        if !student.enrolled_courses.contains(&course_id) {
            student.enrolled_courses.push(course_id);
        }
        if !course.students_enrolled.contains(&student_id) {
            course.students_enrolled.push(student_id);
        }
        Ok(())
    }

    async fn insert_test_marks(&self, marks: NewTestMarks) -> Result<TestMarks, StoreError> {
        let mut data = self.inner.write().await;
        let now = Utc::now();
        let record = TestMarks {
            id: next_id(data.test_marks.len()),
            student_id: marks.student_id,
            course_id: marks.course_id,
            test_name: marks.test_name,
            marks_obtained: marks.marks_obtained,
            total_marks: marks.total_marks,
            percentage: marks.percentage,
            test_date: now,
            created_at: now,
        };
        data.test_marks.push(record.clone());
        Ok(record)
    }

    async fn find_test_marks(&self, student_id: i32) -> Result<Vec<TestMarks>, StoreError> {
        let data = self.inner.read().await;
        Ok(data
            .test_marks
            .iter()
            .filter(|t| t.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn insert_submission(
        &self,
        submission: NewSubmission,
    ) -> Result<AssignmentSubmission, StoreError> {
        let mut data = self.inner.write().await;
        let record = AssignmentSubmission {
            id: next_id(data.submissions.len()),
            student_id: submission.student_id,
            course_id: submission.course_id,
            assignment_name: submission.assignment_name,
            original_file_name: submission.original_file_name,
            file_path: None,
            submitted_at: Utc::now(),
            status: AssignmentStatus::Submitted,
            marks_obtained: 0.0,
            total_marks: DEFAULT_TOTAL_MARKS,
            feedback: None,
            graded_by: None,
            graded_at: None,
        };
        data.submissions.push(record.clone());
        Ok(record)
    }

    async fn find_submission(&self, id: i32) -> Result<Option<AssignmentSubmission>, StoreError> {
        let data = self.inner.read().await;
        Ok(data.submissions.iter().find(|s| s.id == id).cloned())
    }

    async fn find_submissions(
        &self,
        query: SubmissionQuery,
    ) -> Result<Vec<AssignmentSubmission>, StoreError> {
        let data = self.inner.read().await;
        let mut found: Vec<AssignmentSubmission> = data
            .submissions
            .iter()
            .filter(|s| query.student_id.is_none_or(|id| s.student_id == id))
            .filter(|s| query.status.is_none_or(|status| s.status == status))
            .cloned()
            .collect();

        if query.order == SubmissionOrder::NewestFirst {
            // Stable sort keeps insertion order among equal timestamps.
            found.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        }
        Ok(found)
    }

    async fn grade_submission(
        &self,
        id: i32,
        grade: GradeUpdate,
    ) -> Result<AssignmentSubmission, StoreError> {
        let mut data = self.inner.write().await;
        let submission = data
            .submissions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("Assignment {id}")))?;
        submission.apply_grade(grade);
        Ok(submission.clone())
    }
}
