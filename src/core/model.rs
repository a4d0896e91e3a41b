// ClientDesk - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// =============================================================================
// Client (the record rendered by the table)
// =============================================================================

/// A single client record.
///
/// Records are produced by the data source and only ever read by the sort
/// and filter engines; nothing in the pipeline mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Unique identifier, e.g. `CL-1000`.
    pub id: String,

    /// Person or organisation name.
    pub name: String,

    /// Client category. Serialised as `type` to match the external schema.
    #[serde(rename = "type")]
    pub client_type: ClientType,

    /// Contact e-mail address.
    pub email: String,

    /// Account status.
    pub status: ClientStatus,

    /// Name of the user who last modified the record.
    pub updated_by: String,

    /// Creation timestamp (UTC).
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp (UTC), never earlier than `created_at`.
    pub updated_at: DateTime<Utc>,
}

impl Client {
    /// Typed accessor for a sortable attribute.
    pub fn field(&self, field: SortField) -> FieldValue<'_> {
        match field {
            SortField::Id => FieldValue::Text(&self.id),
            SortField::Name => FieldValue::Text(&self.name),
            SortField::Type => FieldValue::Text(self.client_type.label()),
            SortField::Email => FieldValue::Text(&self.email),
            SortField::Status => FieldValue::Text(self.status.label()),
            SortField::UpdatedBy => FieldValue::Text(&self.updated_by),
            SortField::CreatedAt => FieldValue::Time(self.created_at),
            SortField::UpdatedAt => FieldValue::Time(self.updated_at),
        }
    }

    /// Textual attributes searched by the free-text filter.
    pub fn searchable_text(&self) -> [&str; 6] {
        [
            self.id.as_str(),
            self.name.as_str(),
            self.email.as_str(),
            self.client_type.label(),
            self.status.label(),
            self.updated_by.as_str(),
        ]
    }
}

// =============================================================================
// Client type (the filterable category)
// =============================================================================

/// Client category. The toolbar's category buttons select one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientType {
    Individual,
    Corporate,
    #[serde(rename = "Non-profit")]
    NonProfit,
    Government,
}

impl ClientType {
    /// Returns all variants in declaration order.
    pub fn all() -> &'static [ClientType] {
        &[
            ClientType::Individual,
            ClientType::Corporate,
            ClientType::NonProfit,
            ClientType::Government,
        ]
    }

    /// Human-readable label, identical to the serialised form.
    pub fn label(&self) -> &'static str {
        match self {
            ClientType::Individual => "Individual",
            ClientType::Corporate => "Corporate",
            ClientType::NonProfit => "Non-profit",
            ClientType::Government => "Government",
        }
    }

    /// True for organisations (anything but an individual).
    pub fn is_company(&self) -> bool {
        !matches!(self, ClientType::Individual)
    }
}

impl std::fmt::Display for ClientType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Client status
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientStatus {
    Active,
    Inactive,
    Pending,
    Archived,
}

impl ClientStatus {
    pub fn all() -> &'static [ClientStatus] {
        &[
            ClientStatus::Active,
            ClientStatus::Inactive,
            ClientStatus::Pending,
            ClientStatus::Archived,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClientStatus::Active => "Active",
            ClientStatus::Inactive => "Inactive",
            ClientStatus::Pending => "Pending",
            ClientStatus::Archived => "Archived",
        }
    }
}

impl std::fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Sort field / direction / criterion
// =============================================================================

/// Closed set of client attributes the sort engine can order by.
///
/// Serialised with the attribute names used in the persisted sort config
/// (`id`, `name`, `type`, `email`, `status`, `updatedBy`, `createdAt`,
/// `updatedAt`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Id,
    Name,
    Type,
    Email,
    Status,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Returns all variants in the order the "add sort" selector lists them.
    pub fn all() -> &'static [SortField] {
        &[
            SortField::Id,
            SortField::Name,
            SortField::Type,
            SortField::Email,
            SortField::Status,
            SortField::UpdatedBy,
            SortField::CreatedAt,
            SortField::UpdatedAt,
        ]
    }

    /// Label shown in the sort dialog.
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Id => "Client ID",
            SortField::Name => "Client Name",
            SortField::Type => "Client Type",
            SortField::Email => "Email",
            SortField::Status => "Status",
            SortField::UpdatedBy => "Updated By",
            SortField::CreatedAt => "Created At",
            SortField::UpdatedAt => "Updated At",
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Apply this direction to an ascending comparison result.
    pub fn orient(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Short label for the direction toggle button.
    pub fn label(&self) -> &'static str {
        match self {
            SortDirection::Asc => "Ascending",
            SortDirection::Desc => "Descending",
        }
    }
}

/// One sort key with a stable identity.
///
/// The `id` survives reordering and direction toggles so the UI can track
/// a criterion across drags; it is never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCriterion {
    pub id: String,
    pub field: SortField,
    pub direction: SortDirection,
}

// =============================================================================
// Field values (typed accessor output)
// =============================================================================

/// A borrowed attribute value, as returned by [`Client::field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Time(DateTime<Utc>),
}

impl FieldValue<'_> {
    /// Ascending comparison. Text is compared case-insensitively.
    ///
    /// Values of different kinds never occur for the same field; they
    /// compare equal so the next criterion decides.
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => {
                if a == b {
                    Ordering::Equal
                } else {
                    a.to_lowercase().cmp(&b.to_lowercase())
                }
            }
            (FieldValue::Time(a), FieldValue::Time(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Client {
        Client {
            id: "CL-1000".to_string(),
            name: "Acme Inc.".to_string(),
            client_type: ClientType::NonProfit,
            email: "contact@acme.org".to_string(),
            status: ClientStatus::Pending,
            updated_by: "Wei Chen".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 2, 2, 3, 4, 5).unwrap(),
        }
    }

    #[test]
    fn test_client_json_uses_external_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["type"], "Non-profit");
        assert_eq!(json["updatedBy"], "Wei Chen");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("client_type").is_none());
    }

    #[test]
    fn test_sort_criterion_wire_format() {
        let c = SortCriterion {
            id: "x".to_string(),
            field: SortField::UpdatedBy,
            direction: SortDirection::Desc,
        };
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"id":"x","field":"updatedBy","direction":"desc"}"#);
    }

    #[test]
    fn test_text_compare_ignores_case() {
        let a = FieldValue::Text("amy");
        let b = FieldValue::Text("Zed");
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(
            FieldValue::Text("AMY").compare(&FieldValue::Text("amy")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_field_accessor_maps_labels() {
        let c = sample();
        assert_eq!(c.field(SortField::Type), FieldValue::Text("Non-profit"));
        assert_eq!(c.field(SortField::Status), FieldValue::Text("Pending"));
        assert_eq!(c.field(SortField::CreatedAt), FieldValue::Time(c.created_at));
    }

    #[test]
    fn test_direction_flip_and_orient() {
        assert_eq!(SortDirection::Asc.flipped(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.orient(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDirection::Asc.orient(Ordering::Less), Ordering::Less);
    }
}
