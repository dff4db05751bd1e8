use serde::{Deserialize, Deserializer, Serialize};

/// A single user record as returned by the directory API.
///
/// Both display fields are optional: the API may omit a key entirely or send
/// an explicit `null`, and records with extra keys are accepted as-is.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DirectoryUser {
    #[serde(rename = "userPrincipalName")]
    pub user_principal_name: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
}

/// One page of directory results.
#[derive(Deserialize, Clone, Debug)]
pub struct DirectoryPage {
    /// Ordered user records; an absent `value` key reads as an empty page.
    #[serde(default)]
    pub value: Vec<DirectoryUser>,

    // Double Option so a key present with a null value is still seen as
    // present: absent -> None, null -> Some(None), string -> Some(Some(_)).
    #[serde(
        rename = "@odata.nextLink",
        default,
        deserialize_with = "key_presence"
    )]
    next_link: Option<Option<String>>,
}

impl DirectoryPage {
    /// True when the response carried an `@odata.nextLink` key, whatever its
    /// value. More pages exist server-side; this service never follows them.
    pub fn has_next_page(&self) -> bool {
        self.next_link.is_some()
    }

    /// The continuation URL, when the server sent a non-null one.
    pub fn next_link(&self) -> Option<&str> {
        self.next_link.as_ref().and_then(|link| link.as_deref())
    }
}

// Wraps the deserialized value in Some so serde's `default` only kicks in
// when the key is missing altogether.
fn key_presence<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
