//! Ownership checks shared by the services.
//!
//! Mutating an owned resource requires acting as its owner; deletion of
//! posts, job posts and applications is also open to admins. The checks
//! live here so every service rejects with the same error.

use linkup_common::{AppError, AppResult};
use linkup_db::entities::{
    certification, comment, comment_reaction, comment_reply, course, education, experience,
    job_application, job_post, post, post_reaction, reply_reaction,
};

/// A resource attributed to a single profile.
pub trait Owned {
    /// The profile that owns this resource.
    fn owner_id(&self) -> &str;
}

impl Owned for post::Model {
    fn owner_id(&self) -> &str {
        &self.owner_id
    }
}

impl Owned for comment::Model {
    fn owner_id(&self) -> &str {
        &self.owner_id
    }
}

impl Owned for comment_reply::Model {
    fn owner_id(&self) -> &str {
        &self.owner_id
    }
}

impl Owned for post_reaction::Model {
    fn owner_id(&self) -> &str {
        &self.profile_id
    }
}

impl Owned for comment_reaction::Model {
    fn owner_id(&self) -> &str {
        &self.profile_id
    }
}

impl Owned for reply_reaction::Model {
    fn owner_id(&self) -> &str {
        &self.profile_id
    }
}

impl Owned for experience::Model {
    fn owner_id(&self) -> &str {
        &self.profile_id
    }
}

impl Owned for education::Model {
    fn owner_id(&self) -> &str {
        &self.profile_id
    }
}

impl Owned for certification::Model {
    fn owner_id(&self) -> &str {
        &self.profile_id
    }
}

impl Owned for course::Model {
    fn owner_id(&self) -> &str {
        &self.profile_id
    }
}

impl Owned for job_post::Model {
    fn owner_id(&self) -> &str {
        &self.recruiter_id
    }
}

impl Owned for job_application::Model {
    fn owner_id(&self) -> &str {
        &self.applicant_id
    }
}

/// Reject unless the acting profile owns the resource.
pub fn ensure_owner<T: Owned>(resource: &T, profile_id: &str) -> AppResult<()> {
    if resource.owner_id() == profile_id {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Reject unless the acting profile owns the resource or is an admin.
pub fn ensure_owner_or_admin<T: Owned>(
    resource: &T,
    profile_id: &str,
    is_admin: bool,
) -> AppResult<()> {
    if is_admin {
        return Ok(());
    }
    ensure_owner(resource, profile_id)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn create_test_post(owner_id: &str) -> post::Model {
        post::Model {
            id: "n1".to_string(),
            owner_id: owner_id.to_string(),
            parent_post_id: None,
            text_body: "hello".to_string(),
            media_path: None,
            edited: false,
            created_at: Utc::now().into(),
            updated_at: None,
        }
    }

    #[test]
    fn test_owner_passes() {
        let post = create_test_post("p1");
        assert!(ensure_owner(&post, "p1").is_ok());
    }

    #[test]
    fn test_non_owner_rejected() {
        let post = create_test_post("p1");
        let result = ensure_owner(&post, "p2");
        assert!(matches!(result, Err(AppError::Forbidden)));
    }

    #[test]
    fn test_admin_overrides_ownership() {
        let post = create_test_post("p1");
        assert!(ensure_owner_or_admin(&post, "p2", true).is_ok());
    }

    #[test]
    fn test_non_owner_non_admin_rejected() {
        let post = create_test_post("p1");
        let result = ensure_owner_or_admin(&post, "p2", false);
        assert!(matches!(result, Err(AppError::Forbidden)));
    }
}
