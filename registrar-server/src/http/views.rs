//! HTML rendering
//!
//! Plain string templates. Every value that came from a user or the store
//! goes through `escape` before it is written into markup.

use std::fmt::Write;

use axum::response::Html;

use crate::db::{Candidates, Course, EnrollmentRow, Student};
use crate::models::{EnrollmentForm, Notice, StudentForm};

const NAV: &str = r#"<nav>
  <a href="/">Home</a> |
  <a href="/view">Students</a> |
  <a href="/add">Add Student</a> |
  <a href="/search">Search</a> |
  <a href="/courses">Courses</a> |
  <a href="/enrollments">Enrollments</a>
</nav>"#;

/// Escape text for use in HTML content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, notice: Option<&Notice>, body: &str) -> Html<String> {
    let notice = notice
        .map(|n| {
            format!(
                r#"<div class="notice notice-{}">{}</div>"#,
                n.level.as_str(),
                escape(&n.text)
            )
        })
        .unwrap_or_default();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>{title}</title>
</head>
<body>
{nav}
<main>
<h1>{title}</h1>
{notice}
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        nav = NAV,
    ))
}

fn text_input(name: &str, label: &str, value: &str) -> String {
    format!(
        r#"<label>{label} <input type="text" name="{name}" value="{value}" required></label><br>"#,
        value = escape(value),
    )
}

pub fn home(year: i32) -> Html<String> {
    let body = format!(
        r#"<p>Manage students, courses, and enrollments.</p>
<footer>&copy; {} Student Records</footer>"#,
        year
    );
    layout("Student Records", None, &body)
}

fn student_table(students: &[Student]) -> String {
    if students.is_empty() {
        return "<p>No students yet.</p>".to_string();
    }

    let mut html = String::from(
        "<table>\n<tr><th>ID</th><th>Student Number</th><th>First Name</th><th>Last Name</th><th>Course</th><th>Year</th><th>Actions</th></tr>\n",
    );

    for s in students {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>",
            s.id,
            escape(&s.student_number),
            escape(&s.first_name),
            escape(&s.last_name),
            escape(&s.course),
            s.year
        );
        let _ = writeln!(
            html,
            r#"<td><a href="/edit/{id}">Edit</a> <a href="/delete/{id}">Delete</a></td></tr>"#,
            id = s.id
        );
    }
    html.push_str("</table>");
    html
}

pub fn student_list(students: &[Student], notice: Option<&Notice>) -> Html<String> {
    layout("Students", notice, &student_table(students))
}

pub fn student_form(
    title: &str,
    action: &str,
    form: &StudentForm,
    notice: Option<&Notice>,
) -> Html<String> {
    let body = format!(
        r#"<form method="post" action="{action}">
{}
{}
{}
{}
{}
<button type="submit">Save</button>
</form>
<a href="/view">Back to list</a>"#,
        text_input("student_number", "Student Number", &form.student_number),
        text_input("first_name", "First Name", &form.first_name),
        text_input("last_name", "Last Name", &form.last_name),
        text_input("course", "Course", &form.course),
        text_input("year", "Year", &form.year),
        action = escape(action),
    );
    layout(title, notice, &body)
}

pub fn student_delete(student: &Student) -> Html<String> {
    let body = format!(
        r#"<p>Delete {} {} ({})?</p>
<form method="post" action="/delete/{}">
<button type="submit">Delete</button>
</form>
<a href="/view">Cancel</a>"#,
        escape(&student.first_name),
        escape(&student.last_name),
        escape(&student.student_number),
        student.id
    );
    layout("Delete Student", None, &body)
}

pub fn student_search(query: &str, students: &[Student], notice: Option<&Notice>) -> Html<String> {
    let mut body = format!(
        r#"<form method="post" action="/search">
<input type="text" name="query" value="{}" placeholder="Number, name, or course">
<button type="submit">Search</button>
</form>
"#,
        escape(query)
    );
    if !students.is_empty() {
        body.push_str(&student_table(students));
    }
    layout("Search Students", notice, &body)
}

pub fn course_list(courses: &[Course], notice: Option<&Notice>) -> Html<String> {
    let mut body = String::from(r#"<p><a href="/courses/add">Add Course</a></p>"#);
    if courses.is_empty() {
        body.push_str("<p>No courses yet.</p>");
    } else {
        body.push_str("<table>\n<tr><th>ID</th><th>Name</th><th>Actions</th></tr>\n");
        for c in courses {
            let _ = writeln!(
                body,
                r#"<tr><td>{id}</td><td>{}</td><td><a href="/courses/edit/{id}">Edit</a> <a href="/courses/delete/{id}">Delete</a></td></tr>"#,
                escape(&c.name),
                id = c.id
            );
        }
        body.push_str("</table>");
    }
    layout("Courses", notice, &body)
}

pub fn course_form(title: &str, action: &str, name: &str, notice: Option<&Notice>) -> Html<String> {
    let body = format!(
        r#"<form method="post" action="{}">
{}
<button type="submit">Save</button>
</form>
<a href="/courses">Back to courses</a>"#,
        escape(action),
        text_input("name", "Course Name", name)
    );
    layout(title, notice, &body)
}

pub fn course_delete(course: &Course) -> Html<String> {
    let body = format!(
        r#"<p>Delete course {}?</p>
<form method="post" action="/courses/delete/{}">
<button type="submit">Delete</button>
</form>
<a href="/courses">Cancel</a>"#,
        escape(&course.name),
        course.id
    );
    layout("Delete Course", None, &body)
}

pub fn enrollment_list(rows: &[EnrollmentRow], notice: Option<&Notice>) -> Html<String> {
    let mut body = String::from(r#"<p><a href="/enrollments/add">Add Enrollment</a></p>"#);
    if rows.is_empty() {
        body.push_str("<p>No enrollments yet.</p>");
    } else {
        body.push_str(
            "<table>\n<tr><th>ID</th><th>Student Number</th><th>Name</th><th>Course</th></tr>\n",
        );
        for r in rows {
            let _ = writeln!(
                body,
                "<tr><td>{}</td><td>{}</td><td>{} {}</td><td>{}</td></tr>",
                r.id,
                escape(&r.student_number),
                escape(&r.first_name),
                escape(&r.last_name),
                escape(&r.course_name)
            );
        }
        body.push_str("</table>");
    }
    layout("Enrollments", notice, &body)
}

fn option(value: i64, label: &str, selected: &str) -> String {
    let selected = if selected.trim() == value.to_string() {
        " selected"
    } else {
        ""
    };
    format!(
        r#"<option value="{}"{}>{}</option>"#,
        value,
        selected,
        escape(label)
    )
}

pub fn enrollment_form(candidates: &Candidates, form: &EnrollmentForm) -> Html<String> {
    let mut students = String::from(r#"<option value="">-- student --</option>"#);
    for s in &candidates.students {
        let label = format!("{} - {} {}", s.student_number, s.first_name, s.last_name);
        students.push_str(&option(s.id, &label, &form.student_id));
    }

    let mut courses = String::from(r#"<option value="">-- course --</option>"#);
    for c in &candidates.courses {
        courses.push_str(&option(c.id, &c.name, &form.course_id));
    }

    let body = format!(
        r#"<form method="post" action="/enrollments/add">
<label>Student <select name="student_id">{students}</select></label><br>
<label>Course <select name="course_id">{courses}</select></label><br>
<button type="submit">Enroll</button>
</form>
<a href="/enrollments">Back to enrollments</a>"#
    );
    layout("Add Enrollment", None, &body)
}

pub fn not_found(message: &str) -> Html<String> {
    let body = format!(
        r#"<p>{}</p>
<a href="/">Home</a>"#,
        escape(message)
    );
    layout("Not Found", None, &body)
}

pub fn server_error() -> Html<String> {
    layout(
        "Something went wrong",
        None,
        "<p>An internal error occurred. Please try again.</p>",
    )
}
