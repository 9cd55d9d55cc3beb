#![allow(dead_code)]

use timetabler_core::catalog::{Catalog, CatalogCourse, CatalogSection, MeetingBlock};

pub fn block(room: &str, days: &[&str], hours: &[i64]) -> MeetingBlock {
    MeetingBlock {
        room: room.to_string(),
        days: days.iter().map(|d| d.to_string()).collect(),
        hours: hours.to_vec(),
    }
}

pub fn section(instructors: &[&str], schedule: Vec<MeetingBlock>) -> CatalogSection {
    CatalogSection {
        instructor: instructors.iter().map(|i| i.to_string()).collect(),
        schedule,
    }
}

pub fn course(name: &str, units: u32, sections: Vec<(&str, CatalogSection)>) -> CatalogCourse {
    CatalogCourse {
        units,
        course_name: name.to_string(),
        sections: sections
            .into_iter()
            .map(|(n, s)| (n.to_string(), s))
            .collect(),
        exams: Vec::new(),
    }
}

pub fn catalog(courses: Vec<(&str, CatalogCourse)>) -> Catalog {
    Catalog {
        courses: courses
            .into_iter()
            .map(|(code, c)| (code.to_string(), c))
            .collect(),
        ..Catalog::default()
    }
}

/// Three courses with lectures, tutorials and a practical, spread over the week.
pub fn sample_catalog() -> Catalog {
    catalog(vec![
        (
            "CS F111",
            course(
                "Computer Programming",
                4,
                vec![
                    ("L1", section(&["Anita Rao"], vec![block("F102", &["M", "W", "F"], &[2])])),
                    ("L2", section(&["Vikram Singh"], vec![block("F105", &["T", "Th", "S"], &[4])])),
                    ("P1", section(&["Anita Rao", "R. Sharma"], vec![block("Lab 1", &["T"], &[7, 8])])),
                    ("P2", section(&["Meera Iyer"], vec![block("Lab 2", &["Th"], &[7, 8])])),
                    ("P3", section(&["Meera Iyer"], vec![block("Lab 2", &["M"], &[9, 10])])),
                ],
            ),
        ),
        (
            "MATH F112",
            course(
                "Mathematics II",
                3,
                vec![
                    ("L1", section(&["K. Menon"], vec![block("G101", &["M", "W", "F"], &[3])])),
                    ("L2", section(&["P. Das"], vec![block("G102", &["T", "Th", "S"], &[2])])),
                    ("T1", section(&["Sanjay Gupta"], vec![block("G201", &["T"], &[1])])),
                    ("T2", section(&["R. Sharma"], vec![block("G202", &["W"], &[6])])),
                ],
            ),
        ),
        (
            "BIO F110",
            course(
                "Biology Laboratory",
                1,
                vec![
                    ("P1", section(&["L. Nair"], vec![block("B-Lab", &["W"], &[6, 7])])),
                    ("P2", section(&["L. Nair"], vec![block("B-Lab", &["F"], &[6, 7])])),
                ],
            ),
        ),
    ])
}
