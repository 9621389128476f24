//! Common types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type Timestamp = DateTime<Utc>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditFields {
    pub created_at: Timestamp,
    pub modified_at: Option<Timestamp>,
}

impl AuditFields {
    pub fn touch(&mut self) {
        self.modified_at = Some(Utc::now());
    }
}

impl Default for AuditFields {
    fn default() -> Self {
        Self {
            created_at: Utc::now(),
            modified_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_keeps_created_at() {
        let mut audit = AuditFields::default();
        let created = audit.created_at;
        audit.touch();
        assert_eq!(audit.created_at, created);
        assert!(audit.modified_at.is_some());
        assert!(audit.modified_at.unwrap() >= created);
    }
}
