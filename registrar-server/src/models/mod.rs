//! Domain models with validation at construction
//!
//! Raw form submissions are deserialized into `*Form` structs, then turned
//! into validated values before anything reaches the store.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod student;
pub mod course;
pub mod enrollment;
pub mod notice;

pub use validation::ValidationError;
pub use student::{StudentFields, StudentForm};
pub use course::{CourseForm, CourseName};
pub use enrollment::{EnrollmentForm, EnrollmentPair};
pub use notice::{Notice, NoticeLevel, NoticeParams};
