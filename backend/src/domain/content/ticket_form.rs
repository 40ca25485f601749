//! Ticket form and ticket field entities.
//!
//! Forms and fields are singleton-scoped (no country partition). The wire
//! contract elides zero-valued attributes and hides management-only form
//! flags; a form response nests its portal-visible fields in stored order in
//! place of the raw field-id list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn is_zero_i64(value: &i64) -> bool {
    *value == 0
}

fn is_zero_i32(value: &i32) -> bool {
    *value == 0
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A ticket form assembled for portal consumption.
///
/// `ticket_fields` holds the form's portal-visible fields in the order the
/// upstream form lists them; fields that are hidden from or read-only in the
/// portal are dropped during assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketForm {
    #[serde(skip_serializing_if = "is_zero_i64", default)]
    pub id: i64,
    #[serde(skip)]
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub raw_name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub display_name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub raw_display_name: String,
    #[serde(skip)]
    pub end_user_visible: bool,
    #[serde(skip_serializing_if = "is_zero_i32", default)]
    pub position: i32,
    #[serde(skip)]
    pub active: bool,
    #[serde(skip)]
    pub in_all_brands: bool,
    #[serde(skip)]
    pub restricted_brand_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub ticket_fields: Vec<TicketField>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A ticket field in its portal projection.
///
/// Form assembly populates only the attributes the portal renders; the
/// remaining flags stay at their zero values and drop out of the JSON.
/// `description` / `raw_description` use the abbreviated wire names the
/// consumer site expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketField {
    #[serde(skip_serializing_if = "is_zero_i64", default)]
    pub id: i64,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub url: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty", default)]
    pub kind: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub raw_title: String,
    #[serde(rename = "descript", skip_serializing_if = "String::is_empty", default)]
    pub description: String,
    #[serde(
        rename = "raw_descript",
        skip_serializing_if = "String::is_empty",
        default
    )]
    pub raw_description: String,
    #[serde(skip_serializing_if = "is_zero_i32", default)]
    pub position: i32,
    #[serde(skip_serializing_if = "is_false", default)]
    pub active: bool,
    #[serde(skip_serializing_if = "is_false", default)]
    pub required: bool,
    #[serde(skip_serializing_if = "is_false", default)]
    pub collapsed_for_agents: bool,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub regexp_for_validation: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub title_in_portal: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub raw_title_in_portal: String,
    #[serde(skip_serializing_if = "is_false", default)]
    pub visible_in_portal: bool,
    #[serde(skip_serializing_if = "is_false", default)]
    pub editable_in_portal: bool,
    #[serde(skip_serializing_if = "is_false", default)]
    pub required_in_portal: bool,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub tag: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "is_false", default)]
    pub removable: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub custom_field_options: Vec<CustomFieldOption>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub system_field_options: Vec<SystemFieldOption>,
}

/// Selectable option on a custom dropdown field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldOption {
    #[serde(skip_serializing_if = "is_zero_i64", default)]
    pub id: i64,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub raw_name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub value: String,
}

/// Selectable option on a built-in system field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemFieldOption {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub value: String,
}
