use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use common::AssignmentStatus;
use common::records::{
    AssignmentSubmission, Course, DEFAULT_TOTAL_MARKS, GradeUpdate, NewCourse, NewStudent,
    NewSubmission, NewTestMarks, Student, SubmissionOrder, SubmissionQuery, TestMarks,
};
use common::store::{Store, StoreError};
use sea_orm::*;
use tracing::{debug, instrument};

use crate::entity::{assignment_submission, course, enrollment, student, test_marks};

/// Store backed by a SeaORM connection (PostgreSQL or SQLite).
pub struct SeaStore {
    db: DatabaseConnection,
}

impl SeaStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Course ids per student, in enrollment order.
    async fn courses_by_student(
        &self,
        student_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<i32>>, StoreError> {
        let rows = enrollment::Entity::find()
            .filter(enrollment::Column::StudentId.is_in(student_ids))
            .order_by_asc(enrollment::Column::Id)
            .all(&self.db)
            .await?;

        let mut map: HashMap<i32, Vec<i32>> = HashMap::new();
        for row in rows {
            map.entry(row.student_id).or_default().push(row.course_id);
        }
        Ok(map)
    }

    /// Student ids per course, in enrollment order.
    async fn students_by_course(
        &self,
        course_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<i32>>, StoreError> {
        let rows = enrollment::Entity::find()
            .filter(enrollment::Column::CourseId.is_in(course_ids))
            .order_by_asc(enrollment::Column::Id)
            .all(&self.db)
            .await?;

        let mut map: HashMap<i32, Vec<i32>> = HashMap::new();
        for row in rows {
            map.entry(row.course_id).or_default().push(row.student_id);
        }
        Ok(map)
    }

    async fn to_courses(&self, models: Vec<course::Model>) -> Result<Vec<Course>, StoreError> {
        if models.is_empty() {
            return Ok(vec![]);
        }
        let mut rosters = self
            .students_by_course(models.iter().map(|c| c.id).collect())
            .await?;
        Ok(models
            .into_iter()
            .map(|m| {
                let roster = rosters.remove(&m.id).unwrap_or_default();
                course_record(m, roster)
            })
            .collect())
    }

    async fn to_students(&self, models: Vec<student::Model>) -> Result<Vec<Student>, StoreError> {
        if models.is_empty() {
            return Ok(vec![]);
        }
        let mut enrolled = self
            .courses_by_student(models.iter().map(|s| s.id).collect())
            .await?;
        Ok(models
            .into_iter()
            .map(|m| {
                let courses = enrolled.remove(&m.id).unwrap_or_default();
                student_record(m, courses)
            })
            .collect())
    }
}

fn course_record(m: course::Model, students_enrolled: Vec<i32>) -> Course {
    Course {
        id: m.id,
        course_name: m.course_name,
        course_code: m.course_code,
        instructor: m.instructor,
        duration: m.duration,
        description: m.description,
        batch: m.batch,
        students_enrolled,
        created_at: m.created_at,
    }
}

fn student_record(m: student::Model, enrolled_courses: Vec<i32>) -> Student {
    Student {
        id: m.id,
        student_id: m.student_id,
        name: m.name,
        email: m.email,
        contact: m.contact,
        clerk_user_id: m.clerk_user_id,
        enrolled_courses,
        created_at: m.created_at,
    }
}

impl From<test_marks::Model> for TestMarks {
    fn from(m: test_marks::Model) -> Self {
        Self {
            id: m.id,
            student_id: m.student_id,
            course_id: m.course_id,
            test_name: m.test_name,
            marks_obtained: m.marks_obtained,
            total_marks: m.total_marks,
            percentage: m.percentage,
            test_date: m.test_date,
            created_at: m.created_at,
        }
    }
}

impl From<assignment_submission::Model> for AssignmentSubmission {
    fn from(m: assignment_submission::Model) -> Self {
        Self {
            id: m.id,
            student_id: m.student_id,
            course_id: m.course_id,
            assignment_name: m.assignment_name,
            original_file_name: m.original_file_name,
            file_path: m.file_path,
            submitted_at: m.submitted_at,
            status: m.status,
            marks_obtained: m.marks_obtained,
            total_marks: m.total_marks,
            feedback: m.feedback,
            graded_by: m.graded_by,
            graded_at: m.graded_at,
        }
    }
}

#[async_trait]
impl Store for SeaStore {
    #[instrument(skip(self, course), fields(course_code = %course.course_code))]
    async fn insert_course(&self, course: NewCourse) -> Result<Course, StoreError> {
        let model = course::ActiveModel {
            course_name: Set(course.course_name),
            course_code: Set(course.course_code),
            instructor: Set(course.instructor),
            duration: Set(course.duration),
            description: Set(course.description),
            batch: Set(course.batch),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(course_record(model, vec![]))
    }

    async fn list_courses(&self) -> Result<Vec<Course>, StoreError> {
        let models = course::Entity::find()
            .order_by_asc(course::Column::Id)
            .all(&self.db)
            .await?;
        self.to_courses(models).await
    }

    async fn find_course(&self, id: i32) -> Result<Option<Course>, StoreError> {
        let Some(model) = course::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        Ok(self.to_courses(vec![model]).await?.pop())
    }

    async fn find_courses(&self, ids: &[i32]) -> Result<Vec<Course>, StoreError> {
        let models = course::Entity::find()
            .filter(course::Column::Id.is_in(ids.to_vec()))
            .all(&self.db)
            .await?;
        self.to_courses(models).await
    }

    #[instrument(skip(self, student), fields(student_id = %student.student_id))]
    async fn insert_student(&self, student: NewStudent) -> Result<Student, StoreError> {
        let model = student::ActiveModel {
            student_id: Set(student.student_id),
            name: Set(student.name),
            email: Set(student.email),
            contact: Set(student.contact),
            clerk_user_id: Set(student.clerk_user_id),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(student_record(model, vec![]))
    }

    async fn list_students(&self) -> Result<Vec<Student>, StoreError> {
        let models = student::Entity::find()
            .order_by_asc(student::Column::Id)
            .all(&self.db)
            .await?;
        self.to_students(models).await
    }

    async fn find_student(&self, id: i32) -> Result<Option<Student>, StoreError> {
        let Some(model) = student::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        Ok(self.to_students(vec![model]).await?.pop())
    }

    async fn find_student_by_code(&self, student_id: &str) -> Result<Option<Student>, StoreError> {
        let Some(model) = student::Entity::find()
            .filter(student::Column::StudentId.eq(student_id))
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };
        Ok(self.to_students(vec![model]).await?.pop())
    }

    async fn find_students(&self, ids: &[i32]) -> Result<Vec<Student>, StoreError> {
        let models = student::Entity::find()
            .filter(student::Column::Id.is_in(ids.to_vec()))
            .all(&self.db)
            .await?;
        self.to_students(models).await
    }

    #[instrument(skip(self))]
    async fn enroll(&self, student_id: i32, course_id: i32) -> Result<(), StoreError> {
        if student::Entity::find_by_id(student_id)
            .one(&self.db)
            .await?
            .is_none()
        {
            return Err(StoreError::NotFound(format!("Student {student_id}")));
        }
        if course::Entity::find_by_id(course_id)
            .one(&self.db)
            .await?
            .is_none()
        {
            return Err(StoreError::NotFound(format!("Course {course_id}")));
        }

        let existing = enrollment::Entity::find()
            .filter(enrollment::Column::StudentId.eq(student_id))
            .filter(enrollment::Column::CourseId.eq(course_id))
            .one(&self.db)
            .await?;
        if existing.is_some() {
            debug!("Already enrolled");
            return Ok(());
        }

        enrollment::ActiveModel {
            student_id: Set(student_id),
            course_id: Set(course_id),
            enrolled_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(())
    }

    async fn insert_test_marks(&self, marks: NewTestMarks) -> Result<TestMarks, StoreError> {
        let now = Utc::now();
        let model = test_marks::ActiveModel {
            student_id: Set(marks.student_id),
            course_id: Set(marks.course_id),
            test_name: Set(marks.test_name),
            marks_obtained: Set(marks.marks_obtained),
            total_marks: Set(marks.total_marks),
            percentage: Set(marks.percentage),
            test_date: Set(now),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(model.into())
    }

    async fn find_test_marks(&self, student_id: i32) -> Result<Vec<TestMarks>, StoreError> {
        let models = test_marks::Entity::find()
            .filter(test_marks::Column::StudentId.eq(student_id))
            .order_by_asc(test_marks::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(TestMarks::from).collect())
    }

    async fn insert_submission(
        &self,
        submission: NewSubmission,
    ) -> Result<AssignmentSubmission, StoreError> {
        let model = assignment_submission::ActiveModel {
            student_id: Set(submission.student_id),
            course_id: Set(submission.course_id),
            assignment_name: Set(submission.assignment_name),
            original_file_name: Set(submission.original_file_name),
            file_path: Set(None),
            submitted_at: Set(Utc::now()),
            status: Set(AssignmentStatus::Submitted),
            marks_obtained: Set(0.0),
            total_marks: Set(DEFAULT_TOTAL_MARKS),
            feedback: Set(None),
            graded_by: Set(None),
            graded_at: Set(None),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(model.into())
    }

    async fn find_submission(&self, id: i32) -> Result<Option<AssignmentSubmission>, StoreError> {
        Ok(assignment_submission::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(AssignmentSubmission::from))
    }

    async fn find_submissions(
        &self,
        query: SubmissionQuery,
    ) -> Result<Vec<AssignmentSubmission>, StoreError> {
        let mut select = assignment_submission::Entity::find();

        if let Some(student_id) = query.student_id {
            select = select.filter(assignment_submission::Column::StudentId.eq(student_id));
        }
        if let Some(status) = query.status {
            select = select.filter(assignment_submission::Column::Status.eq(status));
        }

        let select = match query.order {
            SubmissionOrder::Stored => select.order_by_asc(assignment_submission::Column::Id),
            SubmissionOrder::NewestFirst => select
                .order_by_desc(assignment_submission::Column::SubmittedAt)
                .order_by_asc(assignment_submission::Column::Id),
        };

        let models = select.all(&self.db).await?;
        Ok(models.into_iter().map(AssignmentSubmission::from).collect())
    }

    #[instrument(skip(self, grade))]
    async fn grade_submission(
        &self,
        id: i32,
        grade: GradeUpdate,
    ) -> Result<AssignmentSubmission, StoreError> {
        let model = assignment_submission::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("Assignment {id}")))?;

        let mut active: assignment_submission::ActiveModel = model.into();
        active.marks_obtained = Set(grade.marks_obtained);
        if let Some(total) = grade.total_marks {
            active.total_marks = Set(total);
        }
        if let Some(feedback) = grade.feedback {
            active.feedback = Set(Some(feedback));
        }
        if let Some(graded_by) = grade.graded_by {
            active.graded_by = Set(Some(graded_by));
        }
        active.graded_at = Set(Some(grade.graded_at));
        active.status = Set(AssignmentStatus::Graded);

        let updated = active.update(&self.db).await?;
        Ok(updated.into())
    }
}
