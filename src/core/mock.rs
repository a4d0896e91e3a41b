// ClientDesk - core/mock.rs
//
// Synthetic client generator used as the record source.
// Deterministic for a given RNG seed and "now" so sessions and tests can be
// reproduced.

use crate::core::model::{Client, ClientStatus, ClientType};
use crate::util::constants::{CLIENT_ID_BASE, MOCK_HISTORY_DAYS};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

const COMPANY_NAMES: &[&str] = &[
    "Acme", "Globex", "Soylent", "Initech", "Umbrella", "Stark", "Wayne", "Cyberdyne", "Massive",
    "Aperture",
];

const COMPANY_SUFFIXES: &[&str] = &[
    "Inc.",
    "Corp.",
    "LLC",
    "Ltd.",
    "Co.",
    "Industries",
    "Enterprises",
    "Systems",
    "Solutions",
    "Technologies",
];

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Michael", "Emily", "David", "Sarah", "Robert", "Maria", "James", "Jessica",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez",
];

const UPDATERS: &[&str] = &[
    "John Smith",
    "Jane Doe",
    "Alex Johnson",
    "Maria Garcia",
    "Wei Chen",
];

const DOMAINS: &[&str] = &[
    "example.com",
    "acme.org",
    "globex.net",
    "bigcorp.io",
    "startup.co",
];

fn pick<'a, R: Rng + ?Sized, T>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

/// A uniformly random instant in `[start, end]`. Returns `start` if the
/// range is empty.
fn random_between<R: Rng + ?Sized>(
    rng: &mut R,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> DateTime<Utc> {
    let span_ms = (end - start).num_milliseconds();
    if span_ms <= 0 {
        return start;
    }
    start + Duration::milliseconds(rng.random_range(0..=span_ms))
}

/// Generate `count` synthetic clients.
///
/// IDs run `CL-1000`, `CL-1001`, ... in generation order. Organisations get
/// a `"{Company} {Suffix}"` name and a `contact@` address; individuals get a
/// `"{First} {Last}"` name and a `first.last@` address. `created_at` falls
/// within the year before `now` and `updated_at` between that and `now`.
pub fn generate_clients<R: Rng + ?Sized>(
    count: usize,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Vec<Client> {
    let history_start = now - Duration::days(MOCK_HISTORY_DAYS);

    let clients: Vec<Client> = (0..count)
        .map(|index| {
            let client_type = *pick(rng, ClientType::all());

            let (name, email) = if client_type.is_company() {
                let company = pick(rng, COMPANY_NAMES);
                let suffix = pick(rng, COMPANY_SUFFIXES);
                let domain = pick(rng, DOMAINS);
                // "globex.net" -> "net"
                let tld = domain.rsplit('.').next().unwrap_or(domain);
                (
                    format!("{company} {suffix}"),
                    format!("contact@{}.{tld}", company.to_lowercase()),
                )
            } else {
                let first = pick(rng, FIRST_NAMES);
                let last = pick(rng, LAST_NAMES);
                let domain = pick(rng, DOMAINS);
                (
                    format!("{first} {last}"),
                    format!(
                        "{}.{}@{domain}",
                        first.to_lowercase(),
                        last.to_lowercase()
                    ),
                )
            };

            let status = *pick(rng, ClientStatus::all());
            let updated_by = pick(rng, UPDATERS).to_string();
            let created_at = random_between(rng, history_start, now);
            let updated_at = random_between(rng, created_at, now);

            Client {
                id: format!("CL-{}", CLIENT_ID_BASE + index),
                name,
                client_type,
                email,
                status,
                updated_by,
                created_at,
                updated_at,
            }
        })
        .collect();

    tracing::debug!(count = clients.len(), "Generated mock clients");
    clients
}
