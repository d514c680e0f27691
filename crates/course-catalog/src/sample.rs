//! Built-in sample offerings for one semester.
//!
//! Used when no catalog file is configured. Registration bounds are the
//! faculty defaults of 9 to 21 credit hours.

use course_model::{Course, CourseCategory, CourseId, CreditBounds};

use crate::catalog::Catalog;
use crate::error::CatalogError;

struct SampleCourse {
    code: &'static str,
    section: &'static str,
    name: &'static str,
    lecturer: &'static str,
    schedule: &'static str,
    credit_hours: u32,
    category: CourseCategory,
}

const SAMPLE_COURSES: &[SampleCourse] = &[
    SampleCourse {
        code: "BCS3013",
        section: "01",
        name: "Software Engineering",
        lecturer: "Dr. Siti Aminah",
        schedule: "Mon 8:00–11:00, Wed 2:00–4:00",
        credit_hours: 3,
        category: CourseCategory::Core,
    },
    SampleCourse {
        code: "BCS3023",
        section: "02",
        name: "Database Systems",
        lecturer: "Prof. Ahmad Zaki",
        schedule: "Tue 9:00–12:00, Thu 3:00–5:00",
        credit_hours: 3,
        category: CourseCategory::Core,
    },
    SampleCourse {
        code: "BCS3033",
        section: "01",
        name: "Web Application Development",
        lecturer: "Dr. Nurul Huda",
        schedule: "Wed 8:00–11:00, Fri 2:00–4:00",
        credit_hours: 3,
        category: CourseCategory::Core,
    },
    SampleCourse {
        code: "BCS3043",
        section: "03",
        name: "Computer Networks",
        lecturer: "Dr. Muhammad Faiz",
        schedule: "Mon 2:00–5:00",
        credit_hours: 3,
        category: CourseCategory::Core,
    },
    SampleCourse {
        code: "BCS3143",
        section: "01",
        name: "Data Mining",
        lecturer: "Dr. Farah Wahida",
        schedule: "Thu 8:00–11:00",
        credit_hours: 3,
        category: CourseCategory::Elective,
    },
    SampleCourse {
        code: "BCS3153",
        section: "02",
        name: "Mobile Application Development",
        lecturer: "Dr. Nurul Huda",
        schedule: "Fri 8:00–11:00",
        credit_hours: 3,
        category: CourseCategory::Elective,
    },
    SampleCourse {
        code: "BCS3164",
        section: "01",
        name: "Machine Learning",
        lecturer: "Prof. Lim Wei Jie",
        schedule: "Tue 2:00–5:00, Thu 11:00–12:00",
        credit_hours: 4,
        category: CourseCategory::Elective,
    },
    SampleCourse {
        code: "UHL2412",
        section: "05",
        name: "English for Academic Communication",
        lecturer: "Pn. Rosnah Ismail",
        schedule: "Wed 11:00–1:00",
        credit_hours: 2,
        category: CourseCategory::University,
    },
    SampleCourse {
        code: "UQB2011",
        section: "10",
        name: "Co-curriculum: Volunteerism",
        lecturer: "En. Hafiz Rahman",
        schedule: "Sat 8:00–10:00",
        credit_hours: 1,
        category: CourseCategory::University,
    },
];

/// Load the built-in sample catalog.
pub fn load_sample_catalog() -> Result<Catalog, CatalogError> {
    let courses = SAMPLE_COURSES
        .iter()
        .map(|sample| {
            let id = CourseId::new(format!("{}-{}", sample.code, sample.section))?;
            let course = Course::new(
                id,
                sample.code,
                sample.name,
                sample.lecturer,
                sample.schedule,
                sample.credit_hours,
                sample.category,
            )?
            .with_section(sample.section);
            Ok(course)
        })
        .collect::<Result<Vec<_>, CatalogError>>()?;
    Catalog::new(CreditBounds::default(), courses)
}
