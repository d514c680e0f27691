use course_model::Course;

/// Courses whose code, name or lecturer contains `query`, in catalog order.
///
/// Matching is case-sensitive. An empty query yields every course.
pub fn filter_courses<'a>(
    courses: &'a [Course],
    query: &'a str,
) -> impl Iterator<Item = &'a Course> + 'a {
    courses
        .iter()
        .filter(move |course| course.matches_query(query))
}
