use serde::{Serialize, Serializer};
use std::fmt;

/// Wraps passenger contact data so it can be passed to `tracing` fields
/// without leaking it. Serialization still emits the real value.
#[derive(Clone)]
pub struct Masked<T>(pub T);

impl<T: AsRef<str>> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&mask_contact(self.0.as_ref()))
    }
}

impl<T: AsRef<str>> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&mask_contact(self.0.as_ref()))
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<T> Masked<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Keeps the first character of the local part and the whole domain:
/// `grace@example.com` becomes `g****@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.trim().split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{}****@{}", first, domain)
        }
        None => "********".to_string(),
    }
}

/// Emails keep their domain; anything else (phone numbers) keeps its last two characters.
fn mask_contact(value: &str) -> String {
    if value.contains('@') {
        return mask_email(value);
    }
    let chars: Vec<char> = value.trim().chars().collect();
    if chars.len() <= 2 {
        return "********".to_string();
    }
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("********{}", tail)
}
