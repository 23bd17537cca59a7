//! Startup records for the user and feature stores.

use crate::model::feature::Feature;
use crate::model::user::User;
use crate::model::EpochMillis;

/// 2024-01-01T00:00:00Z.
const JAN_1_2024: EpochMillis = 1_704_067_200_000;
const DAY_MS: EpochMillis = 86_400_000;

/// Users with ids 1..=3; the third one is inactive.
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            created_at: JAN_1_2024,
            is_active: true,
        },
        User {
            id: 2,
            name: "Jane Smith".to_string(),
            email: "jane.smith@example.com".to_string(),
            created_at: JAN_1_2024 + DAY_MS,
            is_active: true,
        },
        User {
            id: 3,
            name: "Bob Johnson".to_string(),
            email: "bob.johnson@example.com".to_string(),
            created_at: JAN_1_2024 + 2 * DAY_MS,
            is_active: false,
        },
    ]
}

/// Feature flags with ids 1..=2, both enabled.
pub fn seed_features() -> Vec<Feature> {
    vec![
        Feature {
            id: 1,
            name: "Git Flow Integration".to_string(),
            description: "Complete Git Flow workflow with branch protection".to_string(),
            is_enabled: true,
            created_at: JAN_1_2024,
        },
        Feature {
            id: 2,
            name: "CI/CD Pipeline".to_string(),
            description: "GitHub Actions with lint, test, build, and security checks".to_string(),
            is_enabled: true,
            created_at: JAN_1_2024 + DAY_MS,
        },
    ]
}
