//! Test-only fixtures: small job posting tables laid out like
//! [`DatasetSchema::jobs`](crate::DatasetSchema::jobs).

use crate::ItemTable;

/// Header of the reference job postings export.
pub const JOB_COLUMNS: [&str; 12] = [
    "Job ID",
    "Job Title",
    "Short Description",
    "Full Description",
    "Responsibilities",
    "Required Skills",
    "Nice To Have Skills",
    "Role Tags",
    "Job Location",
    "Salary Min",
    "Difficulty",
    "Views",
];

/// Five hand-written postings covering every constraint outcome.
///
/// | id | title              | location      | salary              | difficulty | views |
/// |----|--------------------|---------------|---------------------|------------|-------|
/// | J1 | Data Scientist     | Amsterdam, NL | `€45.000 - €55.000` | 3          | 120   |
/// | J2 | Frontend Developer | Berlin, DE    | 50000               | 2          | 300   |
/// | J3 | Backend Engineer   | Amsterdam     | (empty)             | level 4    | 80    |
/// | J4 | Nurse              | Rotterdam     | 38000               | 2          | 40    |
/// | J5 | Data Engineer      | Utrecht, NL   | negotiable          | (empty)    | (empty) |
#[must_use]
pub fn job_postings_table() -> ItemTable {
    ItemTable::new(JOB_COLUMNS)
        .with_row([
            "J1",
            "Data Scientist",
            "Machine learning models for product analytics",
            "Build machine learning pipelines in Python with pandas and scikit-learn",
            "Train models and analyse experiment data",
            "python, machine learning, sql",
            "spark",
            "Data; AI",
            "Amsterdam, NL",
            "€45.000 - €55.000",
            "3",
            "120",
        ])
        .with_row([
            "J2",
            "Frontend Developer",
            "Craft responsive web interfaces",
            "Ship accessible React components written in TypeScript",
            "Own the design system and frontend performance",
            "react, typescript, css",
            "web animations",
            "Web, Frontend",
            "Berlin, DE",
            "50000",
            "2",
            "300",
        ])
        .with_row([
            "J3",
            "Backend Engineer",
            "Design backend services and APIs",
            "Write Rust and Go services behind a web gateway",
            "Operate databases and message queues",
            "rust, go, postgres",
            "",
            "Backend; Web",
            "Amsterdam",
            "",
            "level 4",
            "80",
        ])
        .with_row([
            "J4",
            "Nurse",
            "Patient care on a surgical ward",
            "Provide hospital patient care in rotating shifts",
            "Monitor patients and administer medication",
            "nursing registration",
            "",
            "Healthcare",
            "Rotterdam",
            "38000",
            "2",
            "40",
        ])
        .with_row([
            "J5",
            "Data Engineer",
            "Data pipelines for analytics teams",
            "Maintain Spark and SQL pipelines orchestrated with Airflow",
            "Model warehouse tables and data quality checks",
            "sql, spark, airflow, python",
            "dbt",
            "Data",
            "Utrecht, NL",
            "negotiable",
            "",
            "",
        ])
}

/// Deterministic synthetic postings for property tests and benchmarks.
///
/// Item `i` draws its skills from a rotating vocabulary so neighbouring
/// items overlap partially and distant ones not at all.
#[must_use]
pub fn synthetic_job_table(count: usize) -> ItemTable {
    const SKILLS: [&str; 12] = [
        "rust", "python", "sql", "react", "spark", "kubernetes", "nursing", "finance", "design",
        "marketing", "java", "statistics",
    ];
    const CITIES: [&str; 4] = ["Amsterdam, NL", "Berlin, DE", "Utrecht, NL", "Remote"];

    let mut table = ItemTable::new(JOB_COLUMNS);
    for index in 0..count {
        let skill = |offset: usize| SKILLS.get((index + offset) % SKILLS.len()).copied();
        let skills: Vec<&str> = (0..3).filter_map(skill).collect();
        let city = CITIES.get(index % CITIES.len()).copied().unwrap_or_default();
        table.push_row([
            format!("S{index}"),
            format!("Synthetic role {index}"),
            format!("Work with {}", skills.join(" and ")),
            format!("Daily {} tasks", skills.join(" ")),
            String::new(),
            skills.join(", "),
            String::new(),
            skills.first().copied().unwrap_or_default().to_owned(),
            city.to_owned(),
            format!("{}", 30_000 + (index % 7) * 5_000),
            format!("{}", 1 + index % 5),
            format!("{}", (index * 37) % 1_000),
        ]);
    }
    table
}
