//! Sample-data fixture
//!
//! Generates a synthetic roster for first runs, when storage holds nothing.
//! Not business logic: any reasonable pseudo-random distribution is fine and
//! determinism is not required.

use rand::Rng;
use time::{Duration, OffsetDateTime};

use crate::record::{Roster, UserRecord};

const FIRST_NAMES: &[&str] = &[
    "John", "Mary", "James", "Patricia", "Robert", "Jennifer", "Michael", "Linda",
    "William", "Elizabeth", "David", "Barbara", "Richard", "Susan", "Joseph", "Jessica",
    "Thomas", "Sarah", "Charles", "Karen", "Christopher", "Nancy", "Daniel", "Lisa",
    "Matthew", "Betty", "Anthony", "Margaret", "Mark", "Sandra",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young",
];

const DOMAINS: &[&str] = &["gmail.com", "ukr.net", "yahoo.com", "outlook.com", "icloud.com"];

/// Registration dates fall within this many days before generation time
const REGISTRATION_WINDOW_DAYS: i64 = 730;

/// Generate `count` synthetic user records with sequential ids starting at 1
pub fn generate(count: usize) -> Roster {
    let mut rng = rand::thread_rng();
    let now = OffsetDateTime::now_utc();

    let records = (0..count)
        .map(|i| {
            let first_name = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
            let last_name = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
            let domain = DOMAINS[rng.gen_range(0..DOMAINS.len())];
            let email = format!(
                "{}.{}{}@{}",
                first_name.to_lowercase(),
                last_name.to_lowercase(),
                i,
                domain
            );

            let days_ago = rng.gen_range(0..REGISTRATION_WINDOW_DAYS);
            let registration_date = now - Duration::days(days_ago);

            UserRecord {
                id: i as u64 + 1,
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email,
                registration_date,
            }
        })
        .collect();

    // Sequential ids cannot collide
    Roster::from_records(records).unwrap_or_default()
}
