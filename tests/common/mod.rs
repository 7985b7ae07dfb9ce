//! Random data supplier shared by the integration suites.
//!
//! Builds pools of users, fans random ads out over them, runs random
//! purchases and leaves some iterations mid-flight, so that invariant checks
//! run against organically mutated catalogues.

#![allow(dead_code)]

use adboard::{AdRecord, AdState, Category, User};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const USER_NAMES: [&str; 12] = [
    "Marcel", "Adam", "Sonia", "Idir", "Mohamed", "Marc", "Ali", "Ziad", "Lyes", "Ayman",
    "Mounir", "Chanez",
];

/// Deterministic generator so failures reproduce
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0xadb0a2d)
}

/// Route library tracing output through the test harness
pub fn init_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn random_category(r: &mut impl Rng) -> Category {
    let all = Category::all();
    all[r.random_range(0..all.len())]
}

pub fn random_state(r: &mut impl Rng) -> AdState {
    let all = AdState::all();
    all[r.random_range(0..all.len())]
}

/// Register `count` users drawn from the name pool
pub fn sample_users(count: usize) -> Vec<User> {
    USER_NAMES
        .iter()
        .cycle()
        .take(count)
        .enumerate()
        .map(|(i, name)| {
            User::new(format!("{name}-{i}"), format!("pass-{name}")).expect("pool names are valid")
        })
        .collect()
}

/// Post `count` ads with random category and price over random users
pub fn seed_ads(r: &mut impl Rng, users: &mut [User], count: usize) -> Vec<AdRecord> {
    let mut ads = Vec::with_capacity(count);
    for n in 0..count {
        let idx = r.random_range(0..users.len());
        let user = &mut users[idx];
        let description = format!("Ad #{n} from {}", user.name());
        let ad = user
            .post(random_category(r), description, r.random_range(1..=100))
            .expect("generated ads are valid");
        ads.push(ad);
    }
    ads
}

/// Attempt up to `attempts` random purchases; returns how many completed
pub fn run_purchases(r: &mut impl Rng, users: &mut [User], attempts: usize) -> usize {
    let mut completed = 0;
    for _ in 0..attempts {
        let b = r.random_range(0..users.len());
        let v = r.random_range(0..users.len());
        if b == v || users[v].len_of(AdState::Open, None) == 0 {
            continue;
        }
        let pick = r.random_range(0..users[v].len_of(AdState::Open, None));
        let ad = users[v].get_of(AdState::Open, None, pick).clone();

        let (buyer, vendor) = pick_two(users, b, v);
        if buyer.available_cash() >= u64::from(ad.price()) && buyer.buy(vendor, &ad).is_ok() {
            completed += 1;
        }
    }
    completed
}

/// Leave every user with a random state/category selection and a partially
/// advanced iteration
pub fn wander(r: &mut impl Rng, users: &mut [User]) {
    for user in users.iter_mut() {
        user.select_state(random_state(r));
        user.select_category(random_category(r));
        let mut steps = r.random_range(0..5);
        while user.has_next() && steps > 0 {
            user.next();
            steps -= 1;
        }
    }
}

/// Two distinct mutable borrows out of one slice
fn pick_two(users: &mut [User], a: usize, b: usize) -> (&mut User, &mut User) {
    assert_ne!(a, b);
    if a < b {
        let (lo, hi) = users.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = users.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}
