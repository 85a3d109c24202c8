//! Roster member model.
//!
//! The roster is owned by an external collaborator; people are read-only
//! inputs to the engine.

use serde::{Deserialize, Serialize};

/// A person on the field-operations roster.
///
/// # Example
///
/// ```
/// use schedule_engine::models::Person;
///
/// let person = Person {
///     id: "tech_014".to_string(),
///     name: "Dana Whitfield".to_string(),
///     zone_name: "North Metro".to_string(),
/// };
/// assert_eq!(person.id, "tech_014");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier for the person.
    pub id: String,
    /// Display name, used for sorting schedule views.
    pub name: String,
    /// The operations zone the person is assigned to.
    #[serde(default)]
    pub zone_name: String,
}
