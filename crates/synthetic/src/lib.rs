//! Synthetic identity, address and payment data.
//!
//! Every scenario run registers its own throwaway account on the target
//! site, so the generated records must be unique per run (the site rejects
//! duplicate emails) and must never contain real personal or card data.
//! Card numbers always carry a designated test prefix.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod pools;

use pools::{CITIES, COMPANY_SUFFIXES, COMPANY_STEMS, FIRST_NAMES, LAST_NAMES, STATES, STREETS};

/// Salutation used by the signup form's title radio group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Title {
    Mr,
    Mrs,
}

impl Title {
    /// Label as rendered by the site, including the trailing dot used in
    /// the address block ("Mr." / "Mrs.").
    pub fn label(&self) -> &'static str {
        match self {
            Title::Mr => "Mr",
            Title::Mrs => "Mrs",
        }
    }
}

/// Date-of-birth triple matching the signup form's three dropdowns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirthDate {
    /// Day as the dropdown value ("1" to "31").
    pub day: String,
    /// Month as the dropdown label ("January" to "December").
    pub month: String,
    /// Year as the dropdown value.
    pub year: String,
}

/// A synthetic registered-user record.
///
/// Generated once per scenario run and handed back to the scenario so it
/// can assert against the same values later (the address echoed at
/// checkout, the name in the logged-in banner).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntheticUser {
    pub title: Title,
    /// Display name used for signup and the logged-in banner.
    pub name: String,
    /// Unique per run; the site uses the email as the account key.
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub address1: String,
    pub address2: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub zipcode: String,
    pub mobile_number: String,
    pub birth: BirthDate,
}

impl SyntheticUser {
    /// The "City State Zip" line as the checkout address block renders it.
    pub fn city_state_zip(&self) -> String {
        format!("{} {} {}", self.city, self.state, self.zipcode)
    }

    /// Salutation + full name as the address block renders it.
    pub fn addressee(&self) -> String {
        format!("{}. {} {}", self.title.label(), self.first_name, self.last_name)
    }
}

/// A synthetic payment card. The number always starts with [`TEST_CARD_PREFIX`]
/// so it can never collide with a real card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCard {
    pub name_on_card: String,
    pub number: String,
    pub cvc: String,
    pub expiry_month: String,
    pub expiry_year: String,
}

/// Well-known test BIN; the demo site accepts any digits.
pub const TEST_CARD_PREFIX: &str = "4242";

/// Generate a fresh synthetic user.
///
/// Email uniqueness comes from a UUID fragment, not from the random name,
/// so two users generated in the same millisecond still never collide.
pub fn synthetic_user() -> SyntheticUser {
    let mut rng = rand::thread_rng();

    let title = if rng.gen_bool(0.5) { Title::Mr } else { Title::Mrs };
    let first_name = pick(&mut rng, FIRST_NAMES);
    let last_name = pick(&mut rng, LAST_NAMES);
    let tag = short_tag();

    SyntheticUser {
        title,
        name: format!("{first_name} {last_name}"),
        email: format!(
            "{}.{}.{}@example.test",
            first_name.to_lowercase(),
            last_name.to_lowercase(),
            tag
        ),
        password: format!("pw-{}-{}", short_tag(), rng.gen_range(1000..9999)),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        company: format!(
            "{} {}",
            pick(&mut rng, COMPANY_STEMS),
            pick(&mut rng, COMPANY_SUFFIXES)
        ),
        address1: format!("{} {}", rng.gen_range(10..9900), pick(&mut rng, STREETS)),
        address2: format!("Apt. {}", rng.gen_range(1..999)),
        country: "United States".to_string(),
        state: pick(&mut rng, STATES).to_string(),
        city: pick(&mut rng, CITIES).to_string(),
        zipcode: format!("{:05}", rng.gen_range(10000..99999)),
        mobile_number: format!(
            "555{:03}{:04}",
            rng.gen_range(200..999),
            rng.gen_range(0..9999)
        ),
        birth: BirthDate {
            day: rng.gen_range(1..=28).to_string(),
            month: pick(
                &mut rng,
                &[
                    "January", "February", "March", "April", "May", "June", "July", "August",
                    "September", "October", "November", "December",
                ],
            )
            .to_string(),
            year: rng.gen_range(1960..=2000).to_string(),
        },
    }
}

/// Generate a synthetic payment card for the given cardholder name.
pub fn synthetic_card(name_on_card: &str) -> PaymentCard {
    let mut rng = rand::thread_rng();
    let mut number = String::from(TEST_CARD_PREFIX);
    for _ in 0..12 {
        number.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }
    PaymentCard {
        name_on_card: name_on_card.to_string(),
        number,
        cvc: format!("{:03}", rng.gen_range(0..1000)),
        expiry_month: format!("{:02}", rng.gen_range(1..=12)),
        expiry_year: rng.gen_range(2027..=2031).to_string(),
    }
}

fn pick<'a>(rng: &mut impl Rng, pool: &[&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or("Sample")
}

fn short_tag() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emails_are_unique_across_runs() {
        let a = synthetic_user();
        let b = synthetic_user();
        assert_ne!(a.email, b.email);
        assert!(a.email.ends_with("@example.test"));
    }

    #[test]
    fn user_fields_are_populated() {
        let user = synthetic_user();
        assert!(!user.first_name.is_empty());
        assert!(!user.last_name.is_empty());
        assert_eq!(user.name, format!("{} {}", user.first_name, user.last_name));
        assert_eq!(user.zipcode.len(), 5);
        assert!(user.mobile_number.starts_with("555"));
        assert_eq!(user.country, "United States");
    }

    #[test]
    fn addressee_matches_site_rendering() {
        let mut user = synthetic_user();
        user.title = Title::Mrs;
        user.first_name = "Dana".into();
        user.last_name = "Reyes".into();
        assert_eq!(user.addressee(), "Mrs. Dana Reyes");
    }

    #[test]
    fn city_state_zip_is_space_joined() {
        let user = synthetic_user();
        let line = user.city_state_zip();
        assert!(line.contains(&user.city));
        assert!(line.ends_with(&user.zipcode));
    }

    #[test]
    fn card_number_carries_test_prefix() {
        let card = synthetic_card("Dana Reyes");
        assert!(card.number.starts_with(TEST_CARD_PREFIX));
        assert_eq!(card.number.len(), 16);
        assert!(card.number.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(card.cvc.len(), 3);
    }

    #[test]
    fn card_expiry_is_in_the_future_window() {
        let card = synthetic_card("Dana Reyes");
        let month: u32 = card.expiry_month.parse().unwrap();
        let year: u32 = card.expiry_year.parse().unwrap();
        assert!((1..=12).contains(&month));
        assert!((2027..=2031).contains(&year));
    }
}
