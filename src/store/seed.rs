//! Sample-data seeding for local development

use super::Store;
use crate::auth::hash_password;
use crate::error::Result;
use chrono::{Duration, Utc};
use rand::{Rng, SeedableRng};

/// Password shared by every seeded account
pub const SEED_PASSWORD: &str = "password123";

const USERNAMES: [&str; 10] = [
    "amara", "bastian", "chiara", "dmitri", "elena", "farid", "greta", "hugo", "imani", "jonas",
];

const TAG_NAMES: [&str; 10] = [
    "work", "personal", "ideas", "groceries", "travel", "reading", "health", "finance",
    "recipes", "projects",
];

const WORDS: [&str; 24] = [
    "meeting", "draft", "follow", "up", "review", "garden", "weekly", "plan", "notes",
    "reminder", "budget", "trip", "book", "recipe", "call", "project", "sketch", "idea",
    "list", "summary", "morning", "evening", "quick", "important",
];

fn sample_sentence<R: Rng>(rng: &mut R) -> String {
    let count = rng.random_range(3..=6);
    let mut words = Vec::with_capacity(count);
    for _ in 0..count {
        words.push(WORDS[rng.random_range(0..WORDS.len())]);
    }
    let joined = words.join(" ");
    let mut chars = joined.chars();
    let sentence = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => joined,
    };
    format!("{}.", sentence)
}

fn sample_paragraph<R: Rng>(rng: &mut R) -> String {
    let count = rng.random_range(2..=4);
    let mut sentences = Vec::with_capacity(count);
    for _ in 0..count {
        sentences.push(sample_sentence(rng));
    }
    sentences.join(" ")
}

/// Drop everything and refill the database with sample data.
///
/// Counts mirror what a small personal deployment looks like: 10 users,
/// 30 notes, 10 tags (1-3 per note), 15 calendar events. All accounts get
/// [`SEED_PASSWORD`], properly hashed, so seeded logins actually work.
pub async fn seed_database(store: &mut Store) -> Result<()> {
    let mut rng = rand::rngs::StdRng::from_os_rng();

    store.reset_schema().await?;

    // One hash for everyone; hashing per-user just slows seeding down.
    let password_hash = hash_password(SEED_PASSWORD)?;

    tracing::info!("Seeding users...");
    let mut user_ids = Vec::new();
    for username in USERNAMES {
        let email = format!("{}@example.com", username);
        let user = store.create_user(username, &email, &password_hash).await?;
        user_ids.push(user.id);
    }

    tracing::info!("Seeding tags...");
    for name in TAG_NAMES {
        store
            .client
            .execute(
                "INSERT INTO tags (name) VALUES ($1) ON CONFLICT (name) DO NOTHING",
                &[&name],
            )
            .await?;
    }

    tracing::info!("Seeding notes...");
    for _ in 0..30 {
        let user_id = user_ids[rng.random_range(0..user_ids.len())];
        let tag_count = rng.random_range(1..=3);
        let mut tags: Vec<String> = Vec::with_capacity(tag_count);
        for _ in 0..tag_count {
            let name = TAG_NAMES[rng.random_range(0..TAG_NAMES.len())].to_string();
            if !tags.contains(&name) {
                tags.push(name);
            }
        }
        let title = sample_sentence(&mut rng);
        let content = sample_paragraph(&mut rng);
        store.create_note(user_id, &title, &content, &tags).await?;
    }

    tracing::info!("Seeding calendar events...");
    for _ in 0..15 {
        let user_id = user_ids[rng.random_range(0..user_ids.len())];
        let start = Utc::now() - Duration::days(rng.random_range(0..180))
            + Duration::hours(rng.random_range(0..24));
        let end = start + Duration::hours(rng.random_range(1..=3));
        let title = sample_sentence(&mut rng);
        let description = sample_paragraph(&mut rng);
        store
            .create_event(user_id, &title, Some(&description), start, end)
            .await?;
    }

    Ok(())
}
