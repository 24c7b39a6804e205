use chrono::Utc;
use common::records::{GradeUpdate, NewCourse, NewStudent, NewSubmission, NewTestMarks};
use common::store::{Store, StoreError};
use tracing::info;

struct SampleCourse {
    name: &'static str,
    code: &'static str,
    instructor: &'static str,
    duration: &'static str,
    batch: &'static str,
}

const SAMPLE_COURSES: &[SampleCourse] = &[
    SampleCourse {
        name: "Advanced Web Development",
        code: "AWD101",
        instructor: "Dr. Sarah Johnson",
        duration: "12 weeks",
        batch: "Batch A - 2024",
    },
    SampleCourse {
        name: "Data Science Fundamentals",
        code: "DSF201",
        instructor: "Prof. Mike Chen",
        duration: "10 weeks",
        batch: "Batch B - 2024",
    },
    SampleCourse {
        name: "Machine Learning",
        code: "ML301",
        instructor: "Dr. Emily Watson",
        duration: "14 weeks",
        batch: "Batch C - 2024",
    },
];

struct SampleStudent {
    student_id: &'static str,
    name: &'static str,
    email: &'static str,
    contact: &'static str,
    clerk_user_id: &'static str,
    /// Indices into [`SAMPLE_COURSES`].
    courses: &'static [usize],
}

const SAMPLE_STUDENTS: &[SampleStudent] = &[
    SampleStudent {
        student_id: "STU2024001",
        name: "Alex Johnson",
        email: "alex.johnson@brillx.com",
        contact: "+1234567890",
        clerk_user_id: "user_123",
        courses: &[0, 1],
    },
    SampleStudent {
        student_id: "STU2024002",
        name: "Sarah Wilson",
        email: "sarah.wilson@brillx.com",
        contact: "+1234567891",
        clerk_user_id: "user_124",
        courses: &[1, 2],
    },
];

/// Insert demo courses, students, test marks and submissions.
///
/// Returns `false` without writing anything when the store already holds
/// courses.
pub async fn seed_sample_data(store: &dyn Store) -> Result<bool, StoreError> {
    if !store.list_courses().await?.is_empty() {
        info!("Store already has courses, skipping sample data");
        return Ok(false);
    }

    let mut courses = Vec::with_capacity(SAMPLE_COURSES.len());
    for c in SAMPLE_COURSES {
        let course = store
            .insert_course(NewCourse {
                course_name: c.name.into(),
                course_code: c.code.into(),
                instructor: Some(c.instructor.into()),
                duration: Some(c.duration.into()),
                description: None,
                batch: Some(c.batch.into()),
            })
            .await?;
        courses.push(course);
    }

    let mut students = Vec::with_capacity(SAMPLE_STUDENTS.len());
    for s in SAMPLE_STUDENTS {
        let student = store
            .insert_student(NewStudent {
                student_id: s.student_id.into(),
                name: s.name.into(),
                email: s.email.into(),
                contact: Some(s.contact.into()),
                clerk_user_id: s.clerk_user_id.into(),
            })
            .await?;
        for &idx in s.courses {
            store.enroll(student.id, courses[idx].id).await?;
        }
        students.push(student);
    }

    let alex = &students[0];
    let web = &courses[0];
    let data = &courses[1];

    store
        .insert_test_marks(NewTestMarks::new(
            alex.id,
            web.id,
            "Mid-term Assessment",
            85.0,
            100.0,
        ))
        .await?;
    store
        .insert_test_marks(NewTestMarks::new(
            alex.id,
            data.id,
            "Data Analysis Test",
            72.0,
            100.0,
        ))
        .await?;

    let graded = store
        .insert_submission(NewSubmission {
            student_id: alex.id,
            course_id: web.id,
            assignment_name: "React Component Library".into(),
            original_file_name: Some("react-assignment.pdf".into()),
        })
        .await?;
    store
        .grade_submission(
            graded.id,
            GradeUpdate {
                marks_obtained: 92.0,
                total_marks: Some(100.0),
                feedback: Some("Excellent work! Great component structure.".into()),
                graded_by: Some("Dr. Sarah Johnson".into()),
                graded_at: Utc::now(),
            },
        )
        .await?;
    store
        .insert_submission(NewSubmission {
            student_id: alex.id,
            course_id: web.id,
            assignment_name: "Node.js API Development".into(),
            original_file_name: Some("node-api.zip".into()),
        })
        .await?;

    info!(
        courses = courses.len(),
        students = students.len(),
        "Seeded sample data"
    );
    Ok(true)
}
